use assert_matches::assert_matches;
use gallows::game::{GameSession, GameStatus, GuessOutcome, MASK_CHAR};
use gallows::language::{CorpusSupplier, DifficultyTier, FixedWordSupplier, SupplierError, WordSupplier};

fn session(answer: &str) -> GameSession {
    GameSession::new(DifficultyTier::Basic, &FixedWordSupplier::new(answer)).unwrap()
}

fn session_with_lives(answer: &str, lives: i32) -> GameSession {
    GameSession::with_max_lives(DifficultyTier::Basic, &FixedWordSupplier::new(answer), lives)
        .unwrap()
}

#[test]
fn correct_guess_reveals_letter() {
    let mut game = session("apple");
    assert_eq!(game.guess_letter("a"), GuessOutcome::Correct);
    assert!(game.guessed().contains(&'a'));
    assert_eq!(game.masked(), "a____");
    assert_eq!(game.lives(), 6);
}

#[test]
fn incorrect_guess_costs_a_life() {
    let mut game = session("apple");
    assert_eq!(game.guess_letter("z"), GuessOutcome::Incorrect);
    assert!(game.guessed().contains(&'z'));
    assert_eq!(game.masked(), "_____");
    assert_eq!(game.lives(), game.max_lives() - 1);
}

#[test]
fn repeated_guess_changes_nothing() {
    let mut game = session("apple");
    game.guess_letter("a");
    let lives = game.lives();
    let guessed = game.guessed().clone();

    assert_eq!(game.guess_letter("a"), GuessOutcome::Repeated);
    assert_eq!(game.lives(), lives);
    assert_eq!(game.guessed(), &guessed);
}

#[test]
fn repeated_miss_is_not_charged_twice() {
    let mut game = session("apple");
    assert_eq!(game.guess_letter("q"), GuessOutcome::Incorrect);
    assert_eq!(game.guess_letter("Q"), GuessOutcome::Repeated);
    assert_eq!(game.lives(), 5);
}

#[test]
fn masked_with_repeated_letters() {
    let mut game = session_with_lives("letter", 5);
    game.guess_letter("e");
    assert_eq!(game.masked(), "_e__e_");
    game.guess_letter("t");
    assert_eq!(game.masked(), "_ette_");
}

#[test]
fn masked_banana() {
    let mut game = session("banana");
    assert_eq!(game.masked(), "______");
    game.guess_letter("a");
    game.guess_letter("b");
    assert_eq!(game.masked(), "ba_a_a");
}

#[test]
fn masked_phrase_keeps_spaces_and_punctuation() {
    let mut game = session("Test-Driven development");
    assert_eq!(game.masked(), "____-______ ___________");
    game.guess_letter("e");
    assert_eq!(game.masked(), "_e__-____e_ _e_e____e__");
}

#[test]
fn masked_properties_hold_after_any_guesses() {
    let answer = "object oriented programming!";
    let mut game = session(answer);
    for input in ["o", "x", "R", "7", "g", "g", "", "ing"] {
        game.guess_letter(input);

        let masked: Vec<char> = game.masked().chars().collect();
        let original: Vec<char> = game.answer().chars().collect();
        assert_eq!(masked.len(), original.len());
        for (m, a) in masked.iter().zip(&original) {
            if a.is_alphabetic() {
                assert_eq!(*m == MASK_CHAR, !game.guessed().contains(a));
            } else {
                assert_eq!(m, a);
            }
        }
    }
}

#[test]
fn valid_guess_boundaries() {
    let game = session("apple");
    assert!(game.valid_guess("a"));
    assert!(game.valid_guess("A"));
    for input in ["", "ab", "abc", "1", "@", " ", "\n"] {
        assert!(!game.valid_guess(input), "{input:?} should be invalid");
    }
}

#[test]
fn invalid_guesses_are_outcomes_not_errors() {
    let mut game = session("cake");
    for input in ["1", "", "ab", "&"] {
        assert_eq!(game.guess_letter(input), GuessOutcome::Invalid);
    }
    assert!(game.guessed().is_empty());
    assert_eq!(game.lives(), 6);
}

#[test]
fn guesses_are_case_insensitive() {
    let mut game = session("Apple");
    assert_eq!(game.guess_letter("a"), GuessOutcome::Correct);
    assert_eq!(game.guess_letter("P"), GuessOutcome::Correct);
    assert!(game.guessed().contains(&'a'));
    assert!(game.guessed().contains(&'p'));
    assert_eq!(game.masked(), "app__");

    let mut upper = session("apple");
    let mut lower = session("apple");
    assert_eq!(upper.guess_letter("Z"), lower.guess_letter("z"));
    assert_eq!(upper.guessed(), lower.guessed());
    assert_eq!(upper.lives(), lower.lives());
}

#[test]
fn all_letters_guessed_wins() {
    let mut game = session("dog");
    for ch in ["d", "o", "g"] {
        game.guess_letter(ch);
    }
    assert_eq!(game.masked(), "dog");
    assert!(game.is_won());
    assert!(!game.is_lost());
}

#[test]
fn partially_guessed_is_not_won() {
    let mut game = session("cat");
    game.guess_letter("c");
    game.guess_letter("a");
    assert!(!game.is_won());
}

#[test]
fn running_out_of_lives_loses() {
    let mut game = session_with_lives("bat", 3);
    game.guess_letter("x");
    game.guess_letter("y");
    game.guess_letter("z");
    assert_eq!(game.lives(), 0);
    assert!(game.is_lost());
    assert!(!game.is_won());
    assert_eq!(game.status(), GameStatus::Lost);
}

#[test]
fn win_with_lives_to_spare_is_not_lost() {
    let mut game = session_with_lives("bat", 3);
    game.guess_letter("x");
    game.guess_letter("b");
    assert!(!game.is_lost());
    game.guess_letter("a");
    game.guess_letter("t");
    assert!(!game.is_lost());
    assert!(game.is_won());
}

#[test]
fn completing_the_word_at_zero_lives_is_a_win() {
    let mut game = session_with_lives("go", 1);
    game.guess_letter("g");
    game.time_out();
    assert_eq!(game.lives(), 0);

    assert_eq!(game.guess_letter("o"), GuessOutcome::Correct);
    assert!(game.is_won());
    assert!(!game.is_lost());
    assert_eq!(game.status(), GameStatus::Won);
}

#[test]
fn time_out_costs_one_life_only() {
    let mut game = session("fish");
    game.guess_letter("f");
    let before = game.guessed().clone();

    game.time_out();
    assert_eq!(game.lives(), 5);
    assert_eq!(game.guessed(), &before);
}

#[test]
fn lives_and_guesses_are_monotonic() {
    let mut game = session_with_lives("resource management", 4);
    let mut lives = game.lives();
    let mut count = game.guessed().len();

    for (i, input) in ["r", "z", "R", "9", "e", "q", "", "m", "w", "n"]
        .iter()
        .enumerate()
    {
        if i % 3 == 0 {
            game.time_out();
        }
        game.guess_letter(input);

        assert!(game.lives() <= lives);
        assert!(game.guessed().len() >= count);
        assert!(game.lives() <= game.max_lives());
        assert!(!(game.is_won() && game.is_lost()));
        lives = game.lives();
        count = game.guessed().len();
    }
}

#[test]
fn unsupported_tier_fails_construction() {
    struct BasicOnly;
    impl WordSupplier for BasicOnly {
        fn pick_word(&self, tier: DifficultyTier) -> Result<String, SupplierError> {
            match tier {
                DifficultyTier::Basic => Ok("word".to_string()),
                other => Err(SupplierError::UnsupportedTier {
                    tier: other.to_string(),
                }),
            }
        }
    }

    assert!(GameSession::new(DifficultyTier::Basic, &BasicOnly).is_ok());
    assert_matches!(
        GameSession::new(DifficultyTier::Intermediate, &BasicOnly),
        Err(SupplierError::UnsupportedTier { .. })
    );
}

#[test]
fn supplier_is_consulted_once() {
    use std::cell::Cell;

    struct Counting(Cell<u32>);
    impl WordSupplier for Counting {
        fn pick_word(&self, _tier: DifficultyTier) -> Result<String, SupplierError> {
            self.0.set(self.0.get() + 1);
            Ok("word".to_string())
        }
    }

    let supplier = Counting(Cell::new(0));
    let mut game = GameSession::new(DifficultyTier::Basic, &supplier).unwrap();
    game.guess_letter("w");
    game.time_out();
    let _ = (game.masked(), game.is_won(), game.is_lost());
    assert_eq!(supplier.0.get(), 1);
}

#[test]
fn bundled_corpus_session() {
    let supplier = CorpusSupplier::new().unwrap();
    let game = GameSession::new(DifficultyTier::Intermediate, &supplier).unwrap();

    assert_eq!(game.tier(), DifficultyTier::Intermediate);
    assert!(game.answer().contains(' '));
    assert_eq!(game.answer(), game.answer().to_lowercase());
    assert!(!game.is_won());
}
