// Integration tests for the card store and viewer state machine

use flashcards::markup;
use flashcards::store::CardStore;
use flashcards::viewer::{Controls, ViewState, Viewer};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn seeded() -> Viewer {
    Viewer::new(CardStore::with_samples())
}

#[test]
fn test_store_returns_each_appended_pair() {
    let mut store = CardStore::new();
    for i in 0..25 {
        store.append(format!("q{}", i), format!("a{}", i));
        assert_eq!(store.len(), i + 1);
    }

    for i in 0..25 {
        assert_eq!(store.question(i), Some(format!("q{}", i).as_str()));
        assert_eq!(store.answer(i), Some(format!("a{}", i).as_str()));
    }
    assert_eq!(store.question(25), None);
    assert_eq!(store.answer(25), None);
}

#[test]
fn test_initial_state() {
    let viewer = seeded();

    assert_eq!(
        viewer.state(),
        ViewState::Showing {
            index: 0,
            revealed: false
        }
    );
    let controls = viewer.controls();
    assert!(!controls.back);
    assert!(controls.next);
    assert!(controls.reveal);
    assert_eq!(viewer.status_text(), "Card 1 / 2");
    assert_eq!(viewer.card_view().answer, None);
}

#[test]
fn test_reveal_shows_answer() {
    let mut viewer = seeded();

    assert!(viewer.reveal());
    assert_eq!(
        viewer.state(),
        ViewState::Showing {
            index: 0,
            revealed: true
        }
    );
    assert!(!viewer.controls().reveal);

    let answer = viewer.card_view().answer.expect("answer should be visible");
    assert_eq!(markup::plain_text(&answer), "A: Paris");
}

#[test]
fn test_next_hides_answer() {
    let mut viewer = seeded();
    viewer.reveal();

    assert!(viewer.next());
    assert_eq!(
        viewer.state(),
        ViewState::Showing {
            index: 1,
            revealed: false
        }
    );
    assert_eq!(viewer.card_view().answer, None);
    assert_eq!(viewer.status_text(), "Card 2 / 2");
    assert!(!viewer.controls().next);
    assert!(viewer.controls().back);
}

#[test]
fn test_navigation_stops_at_bounds() {
    let mut viewer = seeded();

    assert!(!viewer.back());
    assert!(viewer.next());
    assert!(!viewer.next());
    assert!(viewer.back());
    assert_eq!(
        viewer.state(),
        ViewState::Showing {
            index: 0,
            revealed: false
        }
    );
}

#[test]
fn test_back_hides_answer() {
    let mut viewer = seeded();
    viewer.next();
    viewer.reveal();

    assert!(viewer.back());
    assert_eq!(
        viewer.state(),
        ViewState::Showing {
            index: 0,
            revealed: false
        }
    );
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn test_blank_question_is_discarded(#[case] question: &str) {
    let mut viewer = seeded();
    viewer.reveal();
    let before = viewer.state();

    assert!(!viewer.add_card(question, "x"));
    assert_eq!(viewer.state(), before);
    assert_eq!(viewer.store().len(), 2);
}

#[test]
fn test_add_card_jumps_to_new_card() {
    let mut viewer = seeded();
    viewer.reveal();

    assert!(viewer.add_card("New Q", "New A"));
    assert_eq!(
        viewer.state(),
        ViewState::Showing {
            index: 2,
            revealed: false
        }
    );
    assert_eq!(viewer.status_text(), "Card 3 / 3");
    assert_eq!(viewer.store().question(2), Some("New Q"));
    assert_eq!(viewer.store().answer(2), Some("New A"));
}

#[test]
fn test_add_card_from_middle_of_deck() {
    let mut viewer = seeded();
    viewer.add_card("Q3", "A3");
    viewer.back();
    viewer.back();

    assert!(viewer.add_card("Q4", "A4"));
    assert_eq!(
        viewer.state(),
        ViewState::Showing {
            index: 3,
            revealed: false
        }
    );
    assert!(!viewer.controls().next);
}

#[test]
fn test_size_never_decreases() {
    let mut viewer = Viewer::new(CardStore::new());
    let mut last = viewer.store().len();

    let actions: [&dyn Fn(&mut Viewer); 5] = [
        &|v| {
            v.add_card("q", "a");
        },
        &|v| {
            v.next();
        },
        &|v| {
            v.back();
        },
        &|v| {
            v.reveal();
        },
        &|v| {
            v.add_card(" ", "a");
        },
    ];
    for round in 0..4 {
        for action in &actions {
            action(&mut viewer);
            assert!(viewer.store().len() >= last, "round {}", round);
            last = viewer.store().len();
        }
    }
    assert_eq!(last, 4);
}

#[test]
fn test_empty_viewer() {
    let viewer = Viewer::new(CardStore::new());
    let view = viewer.card_view();

    assert_eq!(viewer.state(), ViewState::Empty);
    assert_eq!(
        viewer.controls(),
        Controls {
            back: false,
            reveal: false,
            next: false,
            add: true
        }
    );
    assert_eq!(markup::plain_text(&view.question), "(no cards)");
    assert_eq!(view.status, "Card 0 / 0");
}

#[test]
fn test_question_and_answer_escaped_identically() {
    let text = "if a < b && b > c";
    let mut viewer = Viewer::new(CardStore::new());
    viewer.add_card(text, text);
    viewer.reveal();

    let view = viewer.card_view();
    let answer = view.answer.expect("answer should be visible");
    let escaped = markup::escape(text);

    assert_eq!(escaped, "if a &lt; b &amp;&amp; b &gt; c");
    assert!(view.question.ends_with(&*escaped));
    assert!(answer.ends_with(&*escaped));
    assert_eq!(markup::plain_text(&view.question), format!("Q: {}", text));
    assert_eq!(markup::plain_text(&answer), format!("A: {}", text));
}
