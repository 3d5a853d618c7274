use std::cell::RefCell;
use std::rc::Rc;

use features::{CodeInput, SearchInput};
use futures::future::Aborted;
use tokio::time::{Instant, sleep};

use super::*;
use crate::state::panel::{PanelPhase, PanelState};

fn code_input() -> CodeInput {
    CodeInput { code: "for (let i = 0; i < n; i++) {}".to_owned(), ..CodeInput::default() }
}

// =============================================================
// percent
// =============================================================

#[test]
fn percent_rounds_down_and_caps() {
    assert_eq!(percent(0, 25), 0);
    assert_eq!(percent(1, 3), 33);
    assert_eq!(percent(25, 25), 100);
    assert_eq!(percent(30, 25), 100);
    assert_eq!(percent(0, 0), 100);
}

// =============================================================
// simulate
// =============================================================

#[tokio::test(start_paused = true)]
async fn code_run_completes_after_fixed_delay() {
    let started = Instant::now();
    let analysis = simulate(code_input(), sleep, |_| {}).await;

    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(2500), "finished early: {elapsed:?}");
    assert!(elapsed < Duration::from_millis(2600), "finished late: {elapsed:?}");
    assert_eq!(analysis.metrics.maintainability, 85);
    assert_eq!(analysis.suggestions.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn progress_reports_every_tick_and_ends_at_100() {
    let mut seen = Vec::new();
    simulate(code_input(), sleep, |pct| seen.push(pct)).await;

    assert_eq!(seen.len(), 25);
    assert!(seen.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(seen.last(), Some(&100));
}

#[tokio::test(start_paused = true)]
async fn search_result_reflects_input_at_trigger_time() {
    let input = SearchInput { query: "auth".to_owned(), selected_pages: vec!["page-3".to_owned()] };
    let result = simulate(input, sleep, |_| {}).await;
    assert_eq!(result.sources.len(), 1);
    assert_eq!(result.sources[0].title, "Database Schema");
}

// =============================================================
// Panel lifecycle over the virtual clock
// =============================================================

#[tokio::test(start_paused = true)]
async fn panel_is_busy_until_delay_elapses() {
    let panel = Rc::new(RefCell::new(PanelState::default()));
    let ticket = panel.borrow_mut().begin(&code_input()).unwrap();
    assert_eq!(panel.borrow().phase(), PanelPhase::Busy);

    let progress_panel = panel.clone();
    let run = simulate(code_input(), sleep, move |pct| {
        progress_panel.borrow_mut().report_progress(ticket, pct);
    });
    tokio::pin!(run);

    tokio::select! {
        _ = &mut run => panic!("run finished before its delay"),
        () = sleep(Duration::from_millis(1050)) => {}
    }
    assert_eq!(panel.borrow().phase(), PanelPhase::Busy);
    assert_eq!(panel.borrow().progress(), 40);

    let result = run.await;
    assert!(panel.borrow_mut().complete(ticket, result));
    assert_eq!(panel.borrow().phase(), PanelPhase::Ready);
}

// =============================================================
// PendingTask
// =============================================================

#[tokio::test(start_paused = true)]
async fn dropping_handle_aborts_run() {
    let (run, task) = abortable(FeatureId::Code, simulate(code_input(), sleep, |_| {}));
    assert_eq!(task.feature(), FeatureId::Code);
    drop(task);
    assert_eq!(run.await, Err(Aborted));
}

#[tokio::test(start_paused = true)]
async fn live_handle_lets_run_finish() {
    let (run, task) = abortable(FeatureId::Code, simulate(code_input(), sleep, |_| {}));
    let analysis = run.await.expect("run was not aborted");
    assert_eq!(task.feature(), FeatureId::Code);
    assert_eq!(analysis.suggestions.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn aborted_run_never_writes_panel() {
    let panel = Rc::new(RefCell::new(PanelState::default()));
    let ticket = panel.borrow_mut().begin(&code_input()).unwrap();

    let write_panel = panel.clone();
    let (run, task) = abortable(FeatureId::Code, async move {
        let result = simulate(code_input(), sleep, |_| {}).await;
        write_panel.borrow_mut().complete(ticket, result);
    });

    drop(task);
    panel.borrow_mut().cancel();
    assert_eq!(run.await, Err(Aborted));
    assert!(panel.borrow().result().is_none());
    assert_eq!(panel.borrow().phase(), PanelPhase::Idle);
}
