use yew::prelude::*;
use log::{info, Level};

mod config;
mod presentation {
    pub mod scroll;
    pub mod breakpoints;
    pub mod typewriter;
}
mod components {
    pub mod typewriter_text;
    pub mod welcome_section;
    pub mod projects_section;
    pub mod contact_section;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[function_component]
fn App() -> Html {
    html! {
        <Home />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
