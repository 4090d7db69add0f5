/// Per-tick reaction trait for components driven by the engine
///
/// `Ctx` carries whatever the component needs from the engine for this tick.
/// The arrival generator, for example, reacts to the current tick and hands
/// back the timestamp of a newly arrived car.
pub trait React<Ctx = ()> {
    type Output;

    /// Execute the component's logic and return optional output
    fn react(&mut self, ctx: Ctx) -> Option<Self::Output>;
}

/// State update trait for stateful components
///
/// Called once per simulation tick, after arrivals and dispatch have run.
pub trait Cycle {
    type Output;

    /// Advance internal state by one tick and return optional output
    fn cycle(&mut self) -> Option<Self::Output>;
}
