//! Algorithm Visualization Playback
//!
//! Deterministic replay of algorithm step logs with playback controls.
//!
//! # Architecture
//!
//! - **Catalog**: Stable keys for every visualization and what each supports
//! - **Interpreters**: Pure reducers from a step log to a drawable view
//! - **Timeline**: Cursor over a step log: play, pause, step, seek
//! - **Session**: The selected visualization with its structure and timeline
//! - **Player**: Timed playback on tokio with a cancellable ticker
//! - **Explainer**: Optional explanation text from a caller-supplied source
//!
//! # Usage
//!
//! ```ignore
//! let player = Player::new(AlgorithmKey::BubbleSort, SessionConfig::from_env())?;
//! let mut frames = player.subscribe();
//! player.play().await;
//! while frames.changed().await.is_ok() {
//!     println!("{}", frames.borrow().view.message());
//! }
//! ```

mod catalog;
mod config;
mod error;
mod explain;
pub mod interpret;
mod player;
mod session;
mod timeline;

pub use catalog::{Affordance, AlgorithmKey, Category, Complexity};
pub use config::{SessionConfig, Speeds};
pub use error::{Error, Result};
pub use explain::{ExplainConfig, ExplainError, Explainer, ExplanationSource, Prompt};
pub use interpret::{Interpreter, View};
pub use player::Player;
pub use session::{Frame, Session};
pub use timeline::{Controls, PlaybackState, PlaybackStatus, Speed, Timeline};

pub use algoviz_structures::parse_value;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpret::SortMark;

    #[test]
    fn bubble_sort_walkthrough() {
        let mut session = Session::new(AlgorithmKey::BubbleSort, SessionConfig::default()).unwrap();
        let total = session.status().total_steps;
        assert!(total > 0);

        session.play();
        let mut applied = 0;
        while session.step() {
            applied += 1;
        }
        assert_eq!(applied, total);

        let View::Sort(view) = session.view() else {
            panic!("expected sort view");
        };
        assert_eq!(view.message, "Array is sorted.");
        assert!(view.marks.iter().all(|m| *m == Some(SortMark::Sorted)));
    }

    #[test]
    fn queue_walkthrough_from_text_input() {
        let mut session = Session::new(AlgorithmKey::Queue, SessionConfig::default()).unwrap();
        session.dequeue().unwrap();
        session.dequeue().unwrap();

        for input in ["10", " 20 "] {
            session.enqueue(parse_value(input).unwrap()).unwrap();
        }
        let err = parse_value("ten").unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid number.");

        session.dequeue().unwrap();
        while session.step() {}
        let View::Container(view) = session.view() else {
            panic!("expected container view");
        };
        assert_eq!(view.last_removed, Some(10));
        assert_eq!(view.items, vec![20]);
        assert_eq!(view.message, "Dequeued 10");
    }

    #[test]
    fn every_implemented_key_opens() {
        for key in AlgorithmKey::ALL {
            let session = Session::new(key, SessionConfig::default());
            assert_eq!(session.is_ok(), key.is_implemented(), "{key}");
        }
    }

    struct Echo;

    impl ExplanationSource for Echo {
        fn generate(
            &self,
            prompt: &Prompt,
        ) -> impl std::future::Future<Output = std::result::Result<String, ExplainError>> + Send
        {
            let text = prompt.text.lines().nth(1).unwrap_or_default().to_string();
            async move { Ok(text) }
        }
    }

    #[test]
    fn explainer_plugs_into_the_catalog() {
        let key = AlgorithmKey::Queue;
        let config = ExplainConfig {
            api_key: Some("key".to_string()),
            ..ExplainConfig::default()
        };
        let explainer = Explainer::new(config, Echo);
        let text = tokio_test::block_on(explainer.explain(key.name(), key.category()));
        assert!(text.contains(key.name()));
        assert!(text.contains("Stacks & Queues"));
    }

    #[test]
    fn seeded_sessions_agree() {
        let config = SessionConfig {
            seed: 7,
            ..SessionConfig::default()
        };
        let mut a = Session::new(AlgorithmKey::SelectionSort, config.clone()).unwrap();
        let mut b = Session::new(AlgorithmKey::SelectionSort, config).unwrap();
        a.seek(20);
        b.seek(20);
        assert_eq!(a.frame(), b.frame());
    }
}
