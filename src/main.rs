fn main() {
    softsell::logging::init();
    dioxus::launch(softsell::ui::App);
}
