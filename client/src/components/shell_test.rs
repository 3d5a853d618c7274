use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

/// Counts how often the mounted panel would be rebuilt for `shell`.
fn panel_mounts(shell: RwSignal<ShellState>) -> (Memo<Option<FeatureId>>, Arc<AtomicUsize>) {
    let mounts = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&mounts);
    let active = active_feature(shell);
    let mounted = Memo::new(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        active.get()
    });
    (mounted, mounts)
}

#[test]
fn minimize_and_restore_keep_the_panel_mounted() {
    Owner::new().with(|| {
        let shell = RwSignal::new(ShellState::new(ShellVariant::FloatingWidget));
        shell.update(|s| s.select_feature(FeatureId::Code));
        let (mounted, mounts) = panel_mounts(shell);
        assert_eq!(mounted.get_untracked(), Some(FeatureId::Code));

        shell.update(ShellState::toggle_minimized);
        assert!(shell.with_untracked(|s| s.minimized));
        assert_eq!(mounted.get_untracked(), Some(FeatureId::Code));

        shell.update(|s| s.drag(-30.0, 12.0));
        shell.update(ShellState::toggle_minimized);
        assert_eq!(mounted.get_untracked(), Some(FeatureId::Code));
        assert_eq!(mounts.load(Ordering::SeqCst), 1);
    });
}

#[test]
fn selecting_another_feature_remounts_the_panel() {
    Owner::new().with(|| {
        let shell = RwSignal::new(ShellState::new(ShellVariant::TabbedCard));
        let (mounted, mounts) = panel_mounts(shell);
        assert_eq!(mounted.get_untracked(), Some(FeatureId::Search));

        shell.update(|s| s.select_feature(FeatureId::Search));
        assert_eq!(mounted.get_untracked(), Some(FeatureId::Search));
        assert_eq!(mounts.load(Ordering::SeqCst), 1);

        shell.update(|s| s.select_feature(FeatureId::Video));
        assert_eq!(mounted.get_untracked(), Some(FeatureId::Video));
        assert_eq!(mounts.load(Ordering::SeqCst), 2);
    });
}
