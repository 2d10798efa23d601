use std::cell::Cell;
use std::rc::Rc;

use anyhow::Result;
use tokio::sync::watch;
use tracing::info;

use dronehub_core::AppConfig;
use dronehub_scroll::{
    FrameDriver, FrameQueue, HeadlessWindow, ResetOutcome, RouteScrollReset, Scope,
    ScrollConfigExt, ScrollEngine, ScrollState, ScrollSubscription, ScrollTarget, ScrollTo,
    ScrollToOptions, WheelInput,
};

/// Parameters of a headless scroll session
pub struct Session {
    pub routes: Vec<String>,
    pub wheel_notches: u32,
    pub wheel_delta: f64,
    pub viewport: f64,
    pub content: f64,
}

fn describe(outcome: Option<ResetOutcome>) -> &'static str {
    match outcome {
        Some(ResetOutcome::Controller) => "reset to top",
        Some(ResetOutcome::WindowFallback) => "reset window to top",
        None => "unchanged",
    }
}

pub async fn run(config: &AppConfig, session: Session) -> Result<()> {
    let queue = Rc::new(FrameQueue::new());
    let mut engine = ScrollEngine::mount(
        &Scope::root(),
        queue.clone(),
        config.scroll.controller_options(),
    );
    let handle = engine.activate()?;
    handle.set_dimensions(session.viewport, session.content);

    let events = Rc::new(Cell::new(0u64));
    let furthest = Rc::new(Cell::new(0.0f64));
    let subscription = {
        let events = Rc::clone(&events);
        let furthest = Rc::clone(&furthest);
        ScrollSubscription::attach(
            engine.scope(),
            Rc::new(move |state: &ScrollState| {
                events.set(events.get() + 1);
                furthest.set(furthest.get().max(state.scroll));
            }),
            (),
        )?
    };

    let mut reset = RouteScrollReset::new(engine.scope(), Rc::new(HeadlessWindow::new()));
    let scroll_to = ScrollTo::new(engine.scope())?;

    let driver = FrameDriver::from_config(queue.clone(), &config.scroll);
    let tick = driver.tick();
    let settle = config.scroll.animation_duration() + tick * 2;
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    println!(
        "Simulating {} route(s), page {:.0}px in a {:.0}px viewport\n",
        session.routes.len(),
        session.content,
        session.viewport
    );

    let script = async {
        for route in &session.routes {
            println!("  {} ({})", route, describe(reset.observe(route)));

            for _ in 0..session.wheel_notches {
                handle.wheel(WheelInput::vertical(session.wheel_delta));
                tokio::time::sleep(tick * 4).await;
            }
            tokio::time::sleep(settle).await;

            let state = handle.state();
            let (x, y) = state.window_position();
            println!(
                "    scrolled to ({:.0}, {:.0}) ({:.0}% of page)",
                x,
                y,
                state.progress * 100.0
            );
        }

        if scroll_to.scroll_to(ScrollTarget::Bottom, ScrollToOptions::default()) {
            tokio::time::sleep(settle).await;
            println!("  scroll to bottom -> {:.0}px", handle.scroll());
        }

        let _ = shutdown_tx.send(true);
    };

    let (frames, ()) = tokio::join!(driver.run(shutdown_rx), script);

    drop(subscription);
    engine.teardown();
    info!(frames, "Scroll session finished");

    println!("\nSession complete.");
    println!("  Frames:        {}", frames);
    println!("  Scroll events: {}", events.get());
    println!("  Route resets:  {}", reset.resets());
    println!("  Furthest:      {:.0}px", furthest.get());

    Ok(())
}
