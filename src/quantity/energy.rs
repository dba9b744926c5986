quantity!(
    /// Energy in joules, the base unit everything is calculated in.
    Joules, via: f64, suffix: "J", precision: 2
);
