//! Step selection and the view model handed to display surfaces
//!
//! [`StepViewer`] owns the catalog and exactly one selected index. Every
//! successful selection bumps a generation counter; displays compare it with
//! the generation they last drew to know when to restart the line-by-line
//! reveal of the code panel.
//!
//! [`StepViewer::render`] is a pure projection of the current selection: the
//! active step's text plus its code block split on `\n`, each line classified
//! on its own and tagged with its position (the reveal index).

mod errors;

pub use errors::ViewerError;

use crate::catalog::Step;
use crate::classify::{classify, Segment};

/// One classified line of the active code block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedLine {
    /// 0-based position in the code block; lines are revealed in this order
    pub reveal_index: usize,
    pub segments: Vec<Segment>,
}

/// Everything a display needs to draw the active step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView<'a> {
    pub index: usize,
    pub generation: u64,
    pub active_title: &'a str,
    pub active_description: &'a str,
    pub code_title: &'a str,
    pub lines: Vec<RevealedLine>,
}

/// Holds the catalog and the single active step
#[derive(Debug, Clone)]
pub struct StepViewer {
    steps: Vec<Step>,
    selected: usize,
    generation: u64,
}

impl StepViewer {
    /// Create a viewer with the first step active
    pub fn new(steps: Vec<Step>) -> Result<Self, ViewerError> {
        if steps.is_empty() {
            return Err(ViewerError::EmptyCatalog);
        }
        Ok(StepViewer {
            steps,
            selected: 0,
            generation: 0,
        })
    }

    /// Make step `index` the active one.
    ///
    /// Re-selecting the active step is allowed and still counts as a change,
    /// so its reveal starts over.
    pub fn select(&mut self, index: usize) -> Result<(), ViewerError> {
        if index >= self.steps.len() {
            return Err(ViewerError::IndexOutOfRange {
                index: i64::try_from(index).unwrap_or(i64::MAX),
                len: self.steps.len(),
            });
        }
        self.activate(index);
        Ok(())
    }

    /// Move the selection by `delta` steps and return the new index
    pub fn select_relative(&mut self, delta: isize) -> Result<usize, ViewerError> {
        let target = isize::try_from(self.selected)
            .ok()
            .and_then(|current| current.checked_add(delta));

        match target.and_then(|t| usize::try_from(t).ok()) {
            Some(index) if index < self.steps.len() => {
                self.select(index)?;
                Ok(index)
            }
            _ => Err(ViewerError::IndexOutOfRange {
                index: target.map_or(i64::MIN, |t| t as i64),
                len: self.steps.len(),
            }),
        }
    }

    pub fn next(&mut self) -> Result<usize, ViewerError> {
        self.select_relative(1)
    }

    pub fn prev(&mut self) -> Result<usize, ViewerError> {
        self.select_relative(-1)
    }

    pub fn first(&mut self) {
        self.activate(0);
    }

    pub fn last(&mut self) {
        self.activate(self.steps.len() - 1);
    }

    fn activate(&mut self, index: usize) {
        self.selected = index;
        self.generation = self.generation.wrapping_add(1);
        tracing::debug!(step = index, generation = self.generation, "step selected");
    }

    /// Index of the active step
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Number of steps in the catalog (never zero)
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn active(&self) -> &Step {
        &self.steps[self.selected]
    }

    /// Counter bumped on every selection
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Project the active step into a view model
    pub fn render(&self) -> StepView<'_> {
        let step = self.active();
        let lines = step
            .code
            .split('\n')
            .enumerate()
            .map(|(reveal_index, text)| RevealedLine {
                reveal_index,
                segments: classify(text),
            })
            .collect();

        StepView {
            index: self.selected,
            generation: self.generation,
            active_title: &step.title,
            active_description: &step.description,
            code_title: &step.code_title,
            lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::StyleTag;

    fn viewer() -> StepViewer {
        StepViewer::new(vec![
            Step::new("One", "first", "terminal", "$ one\n\n# done"),
            Step::new("Two", "second", "app.toml", "[app]\nname = \"two\""),
            Step::new("Three", "third", "terminal", ""),
        ])
        .unwrap()
    }

    #[test]
    fn test_starts_on_first_step() {
        let v = viewer();
        assert_eq!(v.selected(), 0);
        assert_eq!(v.generation(), 0);
        assert_eq!(v.render().active_title, "One");
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(
            StepViewer::new(Vec::new()).unwrap_err(),
            ViewerError::EmptyCatalog
        );
    }

    #[test]
    fn test_select_out_of_range_leaves_state_alone() {
        let mut v = viewer();
        v.select(1).unwrap();
        let generation = v.generation();

        assert_eq!(
            v.select(3),
            Err(ViewerError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(v.selected(), 1);
        assert_eq!(v.generation(), generation);
    }

    #[test]
    fn test_prev_from_first_reports_minus_one() {
        let mut v = viewer();
        assert_eq!(
            v.prev(),
            Err(ViewerError::IndexOutOfRange { index: -1, len: 3 })
        );
    }

    #[test]
    fn test_relative_moves() {
        let mut v = viewer();
        assert_eq!(v.next(), Ok(1));
        assert_eq!(v.next(), Ok(2));
        assert!(v.next().is_err());
        assert_eq!(v.select_relative(-2), Ok(0));
        assert!(v.select_relative(isize::MIN).is_err());
        v.last();
        assert_eq!(v.selected(), 2);
        v.first();
        assert_eq!(v.selected(), 0);
    }

    #[test]
    fn test_reselect_bumps_generation() {
        let mut v = viewer();
        v.select(0).unwrap();
        v.select(0).unwrap();
        assert_eq!(v.generation(), 2);
    }

    #[test]
    fn test_render_classifies_each_line() {
        let mut v = viewer();
        v.select(1).unwrap();
        let view = v.render();

        assert_eq!(view.code_title, "app.toml");
        assert_eq!(view.lines.len(), 2);
        assert_eq!(view.lines[0].segments[0].tag, StyleTag::SectionHeader);
        assert_eq!(view.lines[1].segments[1].tag, StyleTag::KeyName);
    }

    #[test]
    fn test_render_empty_code_has_one_line() {
        let mut v = viewer();
        v.select(2).unwrap();
        let view = v.render();
        assert_eq!(view.lines.len(), 1);
        assert_eq!(view.lines[0].segments, vec![Segment::new("", StyleTag::Plain)]);
    }
}
