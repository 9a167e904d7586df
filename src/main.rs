// Client-side entry point
//
// Mounts the catalog browser to the document body. There is no server
// half: the app is built to wasm32 and served as static files.

use catalog_browser::web_app::App;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
