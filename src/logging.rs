use once_cell::sync::OnceCell;

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Routes `log` output to the browser console and installs the panic hook.
/// Only the first call has any effect.
pub fn init(level: log::Level) {
    INSTALLED.get_or_init(|| {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(level).is_err() {
            // Another logger is already set; keep it.
            return;
        }
        log::debug!("console logging enabled at {level}");
    });
}
