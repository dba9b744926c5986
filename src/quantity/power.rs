use std::ops::Mul;

use crate::quantity::{energy::Joules, time::Seconds};

quantity!(Watts, via: f64, suffix: "W", precision: 2);

impl Mul<Seconds> for Watts {
    type Output = Joules;

    fn mul(self, time: Seconds) -> Self::Output {
        Joules(self.0 * time.0)
    }
}
