use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use features::{CodeInput, SearchInput};
use futures::future::Aborted;

use super::*;
use crate::util::mock_task::abortable;

fn with_owner<T>(f: impl FnOnce() -> T) -> T {
    Owner::new().with(f)
}

fn code_ready() -> CodeInput {
    CodeInput { code: "let x = 1;".to_owned(), ..CodeInput::default() }
}

/// Run `input` to completion on `panel` without timers.
fn finish_run(panel: PanelHandle<CodeInput>) {
    let input = panel.input.get_untracked();
    let ticket = panel.state.try_update(|s| s.begin(&input)).unwrap().unwrap();
    panel.state.update(|s| {
        s.complete(ticket, input.respond());
    });
}

// =============================================================
// Trigger gating
// =============================================================

#[test]
fn empty_input_cannot_trigger() {
    with_owner(|| {
        let panel = use_panel(CodeInput::default());
        assert!(!panel.can_trigger());
        panel.trigger();
        assert_eq!(panel.phase(), PanelPhase::Idle);
        assert!(panel.result.get_untracked().is_none());
    });
}

#[test]
fn search_query_without_pages_stays_idle() {
    with_owner(|| {
        let panel = use_panel(SearchInput::default());
        panel.edit(|i| i.query = "auth".to_owned());
        assert!(!panel.can_trigger());
        panel.trigger();
        assert_eq!(panel.phase(), PanelPhase::Idle);
    });
}

#[test]
fn valid_trigger_goes_busy_and_blocks_retrigger() {
    with_owner(|| {
        let panel = use_panel(code_ready());
        assert!(panel.can_trigger());

        panel.trigger();
        assert_eq!(panel.phase(), PanelPhase::Busy);
        assert_eq!(panel.progress(), 0);
        assert!(!panel.can_trigger());

        panel.trigger();
        assert!(panel.is_busy());
    });
}

// =============================================================
// Result memo
// =============================================================

#[test]
fn progress_ticks_leave_shown_result_untouched() {
    with_owner(|| {
        let panel = use_panel(code_ready());
        finish_run(panel);

        let runs = Arc::new(AtomicUsize::new(0));
        let counter = runs.clone();
        let shown = Memo::new(move |_| {
            counter.fetch_add(1, Ordering::Relaxed);
            panel.result.get()
        });
        assert!(shown.get().is_some());

        let input = panel.input.get_untracked();
        let ticket = panel.state.try_update(|s| s.begin(&input)).unwrap().unwrap();
        for pct in [20, 40, 60, 80, 90] {
            panel.state.update(|s| {
                s.report_progress(ticket, pct);
            });
            assert!(shown.get().is_some());
        }

        assert_eq!(panel.progress(), 90);
        assert_eq!(runs.load(Ordering::Relaxed), 1);
    });
}

// =============================================================
// Export payload
// =============================================================

#[test]
fn export_is_empty_before_first_run() {
    with_owner(|| {
        let panel = use_panel(code_ready());
        assert!(panel.export_json(ExportTarget::Download, ExportFormat::Pdf).is_none());
    });
}

#[test]
fn export_serializes_shown_result() {
    with_owner(|| {
        let panel = use_panel(code_ready());
        finish_run(panel);

        let payload = panel.exporter().run((ExportTarget::Confluence, ExportFormat::Docx)).unwrap();
        assert_eq!(payload["feature"], "code");
        assert_eq!(payload["target"], "confluence");
        assert_eq!(payload["format"], "docx");
        assert_eq!(payload["result"]["metrics"]["maintainability"], 85);
    });
}

// =============================================================
// Teardown
// =============================================================

#[test]
fn disposing_owner_aborts_pending_run() {
    let owner = Owner::new();
    let run = owner.with(|| {
        let panel = use_panel(code_ready());
        panel.trigger();
        let (run, task) = abortable(FeatureId::Code, std::future::pending::<()>());
        panel.task.set_value(Some(task));
        run
    });

    owner.cleanup();
    assert_eq!(futures::executor::block_on(run), Err(Aborted));
}
