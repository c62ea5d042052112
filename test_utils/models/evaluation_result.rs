use typescribe::ClassifiedWord;

#[derive(Debug)]
pub struct EvaluationResult {
    pub expected: Vec<ClassifiedWord>,
    pub actual: Vec<ClassifiedWord>,
    /// Positions where the expected and actual classifications disagree, including any
    /// positions past the end of the shorter list.
    pub mismatched_positions: Vec<usize>,
}

impl EvaluationResult {
    pub fn new(expected: &[ClassifiedWord], actual: &[ClassifiedWord]) -> Self {
        let max_len = expected.len().max(actual.len());

        let mismatched_positions = (0..max_len)
            .filter(|&idx| expected.get(idx) != actual.get(idx))
            .collect();

        Self {
            expected: expected.to_vec(),
            actual: actual.to_vec(),
            mismatched_positions,
        }
    }

    pub fn is_match(&self) -> bool {
        self.mismatched_positions.is_empty()
    }
}
