use promptdeck::theme::{
    DARK_THEME, LIGHT_THEME, NoopStatusBar, THEME_STORAGE_KEY, ThemeController, ThemeDeps,
    ThemeMode,
};
use proptest::prelude::*;
use std::sync::Arc;
use storage::MemoryStore;

#[derive(Debug, Clone)]
enum Op {
    Toggle,
    Set(ThemeMode),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Toggle),
        Just(Op::Set(ThemeMode::Light)),
        Just(Op::Set(ThemeMode::Dark)),
    ]
}

fn start_mode_strategy() -> impl Strategy<Value = Option<&'static str>> {
    prop_oneof![
        Just(None),
        Just(Some("light")),
        Just(Some("dark")),
        Just(Some("purple")),
    ]
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

fn controller_for(stored: Option<&str>) -> (ThemeController, MemoryStore) {
    let store = match stored {
        Some(value) => MemoryStore::with_entries([(THEME_STORAGE_KEY, value)]),
        None => MemoryStore::new(),
    };
    let deps = ThemeDeps::new(Arc::new(store.clone()), Arc::new(NoopStatusBar));
    (ThemeController::new(deps), store)
}

proptest! {
    #[test]
    fn toggle_count_parity_decides_mode(stored in start_mode_strategy(), toggles in 0usize..40) {
        runtime().block_on(async {
            let (controller, _) = controller_for(stored);
            controller.wait_until_loaded().await;
            let start = controller.snapshot().theme_mode();

            for _ in 0..toggles {
                controller.toggle_theme();
            }

            let expected = if toggles % 2 == 0 { start } else { start.toggled() };
            prop_assert_eq!(controller.snapshot().theme_mode(), expected);
            Ok(())
        })?;
    }

    #[test]
    fn snapshots_stay_consistent(ops in prop::collection::vec(op_strategy(), 0..30)) {
        runtime().block_on(async {
            let (controller, _) = controller_for(None);
            controller.wait_until_loaded().await;

            for op in ops {
                match op {
                    Op::Toggle => controller.toggle_theme(),
                    Op::Set(mode) => controller.set_theme(mode),
                }

                let snapshot = controller.snapshot();
                prop_assert_eq!(snapshot.is_dark(), snapshot.theme_mode() == ThemeMode::Dark);
                let expected = if snapshot.is_dark() { &DARK_THEME } else { &LIGHT_THEME };
                prop_assert!(std::ptr::eq(snapshot.theme(), expected));
            }
            Ok(())
        })?;
    }

    #[test]
    fn restart_restores_last_mode(ops in prop::collection::vec(op_strategy(), 1..20)) {
        runtime().block_on(async {
            let (controller, store) = controller_for(None);
            controller.wait_until_loaded().await;

            for op in ops {
                match op {
                    Op::Toggle => controller.toggle_theme(),
                    Op::Set(mode) => controller.set_theme(mode),
                }
            }
            let final_mode = controller.snapshot().theme_mode();
            controller.flush().await;

            let deps = ThemeDeps::new(Arc::new(store), Arc::new(NoopStatusBar));
            let restarted = ThemeController::new(deps);
            restarted.wait_until_loaded().await;
            prop_assert_eq!(restarted.snapshot().theme_mode(), final_mode);
            Ok(())
        })?;
    }
}
