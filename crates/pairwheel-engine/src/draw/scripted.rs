//! Replays a fixed sequence of picks. Useful for demos and reproducible runs.

use std::collections::VecDeque;

use async_trait::async_trait;
use pairwheel_common::Person;

use super::{DrawError, RandomDraw};

/// Answers each draw with the next scripted name. Once the script runs out
/// it answers with the hint, then with the first candidate.
///
/// Scripted names are returned even when they are not among the
/// candidates, so a script can exercise the session's rejection path.
#[derive(Debug, Default)]
pub struct ScriptedDraw {
    script: VecDeque<String>,
    calls: usize,
}

impl ScriptedDraw {
    pub fn new<S: Into<String>>(script: impl IntoIterator<Item = S>) -> Self {
        Self {
            script: script.into_iter().map(Into::into).collect(),
            calls: 0,
        }
    }

    /// Always follow the hint.
    pub fn follow_hints() -> Self {
        Self::default()
    }

    /// Number of draws answered so far.
    pub fn calls(&self) -> usize {
        self.calls
    }

    /// Scripted answers not yet used.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

#[async_trait]
impl RandomDraw for ScriptedDraw {
    async fn draw(
        &mut self,
        candidates: &[Person],
        target_hint: Option<&Person>,
    ) -> Result<Person, DrawError> {
        self.calls += 1;
        if let Some(name) = self.script.pop_front() {
            return Person::parse(&name)
                .ok_or_else(|| DrawError::Failed(format!("blank scripted pick #{}", self.calls)));
        }
        target_hint
            .or_else(|| candidates.first())
            .cloned()
            .ok_or(DrawError::EmptyCandidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people(names: &[&str]) -> Vec<Person> {
        names.iter().map(|n| Person::parse(n).unwrap()).collect()
    }

    #[tokio::test]
    async fn replays_script_then_follows_hint() {
        let candidates = people(&["a", "b", "c"]);
        let hint = Person::parse("c").unwrap();
        let mut draw = ScriptedDraw::new(["b", "zed"]);

        assert_eq!(draw.draw(&candidates, Some(&hint)).await.unwrap().key(), "b");
        assert_eq!(draw.draw(&candidates, Some(&hint)).await.unwrap().key(), "zed");
        assert_eq!(draw.remaining(), 0);
        assert_eq!(draw.draw(&candidates, Some(&hint)).await.unwrap().key(), "c");
        assert_eq!(draw.draw(&candidates, None).await.unwrap().key(), "a");
        assert_eq!(draw.calls(), 4);
    }

    #[tokio::test]
    async fn empty_candidates_without_hint_fails() {
        let mut draw = ScriptedDraw::follow_hints();
        assert_eq!(
            draw.draw(&[], None).await.unwrap_err(),
            DrawError::EmptyCandidates
        );
    }

    #[tokio::test]
    async fn blank_script_entry_fails() {
        let mut draw = ScriptedDraw::new([" "]);
        let err = draw.draw(&people(&["a"]), None).await.unwrap_err();
        assert!(matches!(err, DrawError::Failed(_)));
    }
}
