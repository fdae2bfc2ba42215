use dioxus::prelude::*;
use dioxus::core::Task;
use dioxus_logger::tracing::debug;
use pricing::{TimerRequest, ToastConfig, ToastMachine, ToastStep, ToastTrigger};

/// Drives a [`ToastMachine`] from the page's [`ToastTrigger`].
///
/// Each instance keeps one timer task. Every new trigger value cancels it before
/// the machine is updated, so a timer from an earlier cycle can never close a
/// newer toast. A repeated `show` bumps the trigger's serial and restarts the cycle.
pub fn use_toast(
    trigger: Signal<ToastTrigger>,
    config: ToastConfig,
    on_close: EventHandler<()>,
) -> Signal<ToastMachine> {
    let mut machine = use_signal(|| ToastMachine::new(config));
    let mut timer = use_signal(|| None::<Task>);
    let requested = use_memo(move || trigger());

    use_effect(move || {
        let visible = requested().visible();

        if let Some(task) = timer.take() {
            task.cancel();
        }

        let request = machine.write().request(visible);
        if let Some(request) = request {
            timer.set(Some(run_timers(machine, request, on_close)));
        }
    });

    machine
}

// Tasks are owned by the component scope and dropped with it on unmount.
fn run_timers(
    mut machine: Signal<ToastMachine>,
    first: TimerRequest,
    on_close: EventHandler<()>,
) -> Task {
    spawn(async move {
        let mut next = Some(first);

        while let Some(request) = next.take() {
            gloo_timers::future::sleep(request.delay).await;

            let step = machine.write().fire(request.ticket);
            match step {
                ToastStep::Schedule(request) => next = Some(request),
                ToastStep::Closed => {
                    debug!("Toast closed");
                    on_close.call(());
                }
                ToastStep::Stale => {}
            }
        }
    })
}
