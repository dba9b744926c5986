quantity!(Seconds, via: f64, suffix: "s", precision: 0);
