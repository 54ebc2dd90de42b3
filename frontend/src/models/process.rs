/// Which process step is highlighted. Only the latest hovered step is active.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepHighlight {
    active: Option<usize>,
}

impl StepHighlight {
    pub fn enter(self, index: usize) -> Self {
        Self { active: Some(index) }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_active_initially() {
        let h = StepHighlight::default();
        assert!(!(0..4).any(|i| h.is_active(i)));
    }

    #[test]
    fn last_hovered_wins() {
        let h = StepHighlight::default().enter(2).enter(0).enter(3);
        assert!(h.is_active(3));
        assert_eq!((0..4).filter(|i| h.is_active(*i)).count(), 1);
    }
}
