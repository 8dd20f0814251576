mod app_router;
mod app_runtime;
mod dom;
mod fullscreen;
mod menu_runtime;
mod metadata_loader;
mod presenter;
mod render_surface;
mod slide_channel;
mod yew_app;

use yew_app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
