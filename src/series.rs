use crate::Vector;

/// Append-only sequence of integer samples, kept in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Series {
    samples: Vec<i32>,
}

impl Series {
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    pub fn append(&mut self, value: i32) {
        self.samples.push(value);
    }

    pub fn get(&self, index: usize) -> Option<i32> {
        self.samples.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.samples.iter().copied()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.samples
    }

    /// Widens every sample to `f64`. Exact for the whole `i32` range.
    pub fn to_vector(&self) -> Vector {
        self.samples.iter().map(|&v| f64::from(v)).collect()
    }
}

impl From<Vec<i32>> for Series {
    fn from(samples: Vec<i32>) -> Self {
        Self { samples }
    }
}

impl FromIterator<i32> for Series {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}
