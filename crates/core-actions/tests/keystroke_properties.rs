mod common;

use common::*;
use core_actions::Step;
use proptest::prelude::*;

fn stroke() -> impl Strategy<Value = Stroke> {
    prop_oneof![
        prop::sample::select(vec![
            'h', 'j', 'k', 'l', '0', 'H', 'L', 'o', 'O', 'i', 'v', 'x', 'é', ' '
        ])
        .prop_map(Stroke::Char),
        Just(Stroke::Esc),
        Just(Stroke::Enter),
        Just(Stroke::Backspace),
        Just(Stroke::Tab),
        Just(Stroke::Up),
        Just(Stroke::Down),
        Just(Stroke::Left),
        Just(Stroke::Right),
    ]
}

fn doc() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-c ]{0,8}", 1..12)
}

proptest! {
    // Arbitrary key sequences (no ':' so the session never ends) keep the
    // cursor inside the document and the viewport.
    #[test]
    fn cursor_stays_addressable(
        lines in doc(),
        height in 1usize..6,
        keys in prop::collection::vec(stroke(), 0..120),
    ) {
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let mut ed = editor_with_height(&refs, height);
        for k in keys {
            let step = ed.handle(k.to_event());
            prop_assert!(matches!(step, Step::Continue(_)));
            let model = ed.model();
            let count = model.buffer().line_count();
            prop_assert!(count >= 1);
            prop_assert!(model.absolute_row() < count);
            prop_assert!(model.view().cursor.screen_row < model.view().viewport.height);
            prop_assert!(model.display_column() <= model.current_line_length());
        }
    }

    // Enter then Backspace in Insert mode restores the document.
    #[test]
    fn enter_then_backspace_restores_document(
        lines in doc(),
        row_seed in any::<usize>(),
        col_seed in any::<usize>(),
    ) {
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let mut ed = editor_with_height(&refs, 4);
        let row = row_seed % lines.len();
        let col = col_seed % (lines[row].chars().count() + 1);
        let mut keys = vec![Stroke::Char('j'); row];
        keys.push(Stroke::Char('i'));
        keys.extend(vec![Stroke::Right; col]);
        replay(&mut ed, &keys);
        prop_assert_eq!(ed.model().view().cursor.column, col);
        replay(&mut ed, &[Stroke::Enter, Stroke::Backspace]);
        prop_assert_eq!(document(&ed), lines);
        prop_assert_eq!(ed.model().absolute_row(), row);
        prop_assert_eq!(ed.model().view().cursor.column, col);
    }
}
