/// Index-aligned time, position, and velocity samples from one integration
/// run. Sample `i` is the vehicle state at `time[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub time: Vec<f64>,     // s
    pub position: Vec<f64>, // m
    pub velocity: Vec<f64>, // m/s
}

impl Trajectory {
    pub fn with_capacity(samples: usize) -> Self {
        Trajectory {
            time: Vec::with_capacity(samples),
            position: Vec::with_capacity(samples),
            velocity: Vec::with_capacity(samples),
        }
    }

    pub fn push(&mut self, time: f64, position: f64, velocity: f64) {
        self.time.push(time);
        self.position.push(position);
        self.velocity.push(velocity);
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn sample(&self, index: usize) -> (f64, f64, f64) {
        (self.time[index], self.position[index], self.velocity[index])
    }

    pub fn last_sample(&self) -> Option<(f64, f64, f64)> {
        if self.is_empty() {
            None
        } else {
            Some(self.sample(self.len() - 1))
        }
    }
}
