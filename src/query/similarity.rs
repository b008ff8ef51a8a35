// src/query/similarity.rs
use crate::catalog::CourseSession;

/// The learner a course family is compared against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile {
    pub age: f64,
    /// 100 for male, 0 for female, on the same scale as `percent_male`.
    pub percent_male: f64,
    /// 100 with a bachelor's degree or higher, else 0.
    pub percent_degree: f64,
}

impl Profile {
    pub fn new(age: i32, gender_flag: u8, bachelor_or_higher: bool) -> Self {
        Profile {
            age: f64::from(age),
            percent_male: f64::from(gender_flag) * 100.0,
            percent_degree: if bachelor_or_higher { 100.0 } else { 0.0 },
        }
    }
}

/// Running sums of the demographic columns for one course family.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DemographicMeans {
    sessions: usize,
    median_age: f64,
    percent_male: f64,
    percent_degree: f64,
}

impl DemographicMeans {
    /// Fold one more session in. Sums accumulate in call order.
    pub fn add(&mut self, s: &CourseSession) {
        self.sessions += 1;
        self.median_age += s.median_age;
        self.percent_male += s.percent_male;
        self.percent_degree += s.percent_degree;
    }

    #[cfg(test)]
    fn sessions(&self) -> usize {
        self.sessions
    }

    /// Squared Euclidean distance between `profile` and the family means.
    /// No rounding is applied.
    pub fn distance(&self, profile: &Profile) -> f64 {
        let n = self.sessions as f64;
        let d_age = profile.age - self.median_age / n;
        let d_male = profile.percent_male - self.percent_male / n;
        let d_degree = profile.percent_degree - self.percent_degree / n;
        d_age * d_age + d_male * d_male + d_degree * d_degree
    }
}
