use crate::model::kind::ScoreKind;

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSet {
    pub berk_jones: Vec<f64>,
    pub higher_criticism: Vec<f64>,
    pub kolmogorov_smirnov: Vec<f64>,
}

impl ScoreSet {
    pub fn zeros(len: usize) -> Self {
        Self {
            berk_jones: vec![0.0; len],
            higher_criticism: vec![0.0; len],
            kolmogorov_smirnov: vec![0.0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.berk_jones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.berk_jones.is_empty()
    }

    pub fn get(&self, kind: ScoreKind) -> &[f64] {
        match kind {
            ScoreKind::BerkJones => &self.berk_jones,
            ScoreKind::HigherCriticism => &self.higher_criticism,
            ScoreKind::KolmogorovSmirnov => &self.kolmogorov_smirnov,
        }
    }

    pub fn get_mut(&mut self, kind: ScoreKind) -> &mut Vec<f64> {
        match kind {
            ScoreKind::BerkJones => &mut self.berk_jones,
            ScoreKind::HigherCriticism => &mut self.higher_criticism,
            ScoreKind::KolmogorovSmirnov => &mut self.kolmogorov_smirnov,
        }
    }
}
