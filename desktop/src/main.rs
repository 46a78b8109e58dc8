use dioxus::desktop::Config;
use dioxus::desktop::WindowBuilder;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus_logger::tracing::info!("starting recharge admin (desktop)");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(WindowBuilder::new().with_title("Recharge Admin")))
        .launch(ui::App);
}
