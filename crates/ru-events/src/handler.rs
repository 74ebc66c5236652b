//! The `EventHandler` trait — the extension point for event kinds.

use crate::EventContext;

/// Runs one event kind.
///
/// The scheduler is already `InProgress` when `fire` is called.  The
/// returned flag is diagnostic only: `true` means the handler did what it
/// set out to do, `false` means it declined.  Either way the handler must
/// make sure the scheduler is eventually released, by requesting a
/// follow-up on the context or by leaving that to a later `Return`,
/// recruitment, or `finish_event` report from the host.
///
/// Any `FnMut(&mut EventContext<'_>) -> bool` closure is a handler:
///
/// ```rust,ignore
/// catalog.register(EventKind::WandererJoins, |ctx: &mut EventContext<'_>| {
///     let Ok(agent) = ctx.checkout() else { return false };
///     ctx.host.deliver(agent, Arrival::new(ctx.kind, ArrivalStyle::WalkIn));
///     ctx.request_schedule(ScheduleMode::Forced);
///     true
/// });
/// ```
pub trait EventHandler {
    fn fire(&mut self, ctx: &mut EventContext<'_>) -> bool;
}

impl<F> EventHandler for F
where
    F: FnMut(&mut EventContext<'_>) -> bool,
{
    fn fire(&mut self, ctx: &mut EventContext<'_>) -> bool {
        self(ctx)
    }
}
