use yew::prelude::*;
use yew_hooks::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use log::error;

use crate::components::contact_section::ContactSection;
use crate::components::projects_section::ProjectsSection;
use crate::components::welcome_section::WelcomeSection;
use crate::config;
use crate::presentation::breakpoints::Breakpoint;
use crate::presentation::scroll::ScrollState;

// A resize can reflow the page and move the offset without a scroll event.
const VIEWPORT_EVENTS: [&str; 2] = ["scroll", "resize"];

#[function_component(Home)]
pub fn home() -> Html {
    let scroll = use_state_eq(ScrollState::default);
    let (width, height) = use_window_size();
    let breakpoint = Breakpoint::from_width(width);

    {
        let scroll = scroll.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.as_ref().map(|window| {
                    let win = window.clone();
                    let update = move || {
                        let y = win.scroll_y().unwrap_or(0.0);
                        scroll.set(ScrollState::from_offset(y, config::HIDE_WELCOME));
                    };
                    // Pick up the current offset on mount, e.g. after a reload mid-page
                    update();

                    let callback = Closure::wrap(Box::new(update) as Box<dyn FnMut()>);
                    for event in VIEWPORT_EVENTS {
                        if let Err(e) = window
                            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                        {
                            error!("Failed to add {} listener: {:?}", event, e);
                        }
                    }
                    callback
                });

                move || {
                    if let (Some(window), Some(callback)) = (window, listener) {
                        for event in VIEWPORT_EVENTS {
                            if let Err(e) = window.remove_event_listener_with_callback(
                                event,
                                callback.as_ref().unchecked_ref(),
                            ) {
                                error!("Failed to remove {} listener: {:?}", event, e);
                            }
                        }
                    }
                }
            },
            (),
        );
    }

    // Room to scroll through the whole welcome animation before the content
    let runway = config::HIDE_WELCOME + height;

    html! {
        <div class={classes!("home", scroll.is_scrolled.then_some("scrolled"))}>
            <style>
                {r#"
                    body { margin: 0; background: #0c0a09; color: #fafaf9; font-family: system-ui, sans-serif; }
                    .welcome-section { position: fixed; inset: 0; overflow: hidden; z-index: 1; }
                    .welcome-inner { position: relative; width: 100%; height: 100%; }
                    .drift { transition: transform 0.1s linear; }
                    .video-block { position: absolute; overflow: hidden; border-radius: 8px; animation: fadeIn 0.8s ease-out both; }
                    .video-block video { width: 100%; height: 100%; object-fit: cover; }
                    .video-placeholder { display: flex; align-items: center; justify-content: center; width: 100%; height: 100%; background: #1f2937; color: #9ca3af; }
                    .top-left { top: 5rem; left: 5rem; width: 15rem; height: 15rem; }
                    .top-center { top: 5rem; left: 20rem; width: 20rem; height: 15rem; }
                    .top-right { top: 4rem; right: 4rem; width: 20rem; height: 16rem; }
                    .bottom-right { top: 35rem; right: 10rem; width: 20rem; height: 10rem; }
                    .headline { position: absolute; top: 20rem; left: 4rem; }
                    .letters { display: flex; }
                    .animated-letter { line-height: 1; letter-spacing: -0.05em; padding: 0.1em 0.05em; transition: color 0.3s; }
                    .tagline { position: absolute; bottom: 0.5rem; left: 0.5rem; font-size: 2rem; font-weight: 300; opacity: 0.8; }
                    .typewriter-caret { display: inline-block; width: 4px; height: 2rem; margin-left: 4px; background: #fff; animation: blink 1s infinite; }
                    .typewriter-caret.deleting { animation: none; opacity: 1; }
                    .social-links { position: absolute; top: 20rem; right: 0; margin: 1.5rem; width: 24rem; padding: 2rem; border-radius: 8px; background: #a8a29e; }
                    .social-links a { display: flex; gap: 1rem; color: #000; font-size: 1.25rem; text-decoration: none; margin: 0.75rem 0; }
                    .welcome-caption { position: absolute; bottom: 4rem; left: 4rem; max-width: 28rem; opacity: 0.6; }
                    .scroll-indicator { position: absolute; bottom: 2rem; left: 50%; transform: translateX(-50%); display: flex; flex-direction: column; align-items: center; opacity: 0.5; animation: bob 2s ease-in-out infinite; }
                    .compact .top-center, .compact .bottom-right { display: none; }
                    .compact .social-links { top: auto; bottom: 8rem; width: auto; }
                    .projects-section, .contact-section { position: relative; z-index: 2; max-width: 64rem; margin: 0 auto 4rem; padding: 2rem; }
                    .card { background: rgba(255, 255, 255, 0.05); border: 1px solid rgba(255, 255, 255, 0.1); border-radius: 1rem; padding: 2rem; }
                    .project-grid { transition: opacity 0.8s, transform 0.8s; }
                    .project-video { position: relative; width: 20rem; height: 15rem; }
                    .wobble { font-size: 3rem; font-weight: bold; animation: wobble 2s infinite; }
                    .contact-form { display: flex; flex-direction: column; gap: 1rem; }
                    .contact-form input, .contact-form textarea { padding: 0.75rem; border-radius: 8px; border: 1px solid #44403c; background: #1c1917; color: inherit; }
                    .form-status.success { color: #4ade80; }
                    .form-status.error { color: #f87171; }
                    @keyframes fadeIn { from { opacity: 0; transform: scale(0.9); } to { opacity: 1; transform: scale(1); } }
                    @keyframes blink { 0%, 100% { opacity: 0; } 50% { opacity: 1; } }
                    @keyframes bob { 0%, 100% { transform: translate(-50%, 0); } 50% { transform: translate(-50%, 10px); } }
                    @keyframes wobble { 0%, 100% { transform: rotate(0); } 25% { transform: rotate(-5deg); } 50% { transform: rotate(5deg); } 75% { transform: rotate(-5deg); } }
                "#}
            </style>
            <WelcomeSection scroll_progress={scroll.scroll_y} {breakpoint} />
            <div class="welcome-runway" style={format!("height: {}px;", runway)} />
            <ProjectsSection is_visible={scroll.show_main_content} />
            <ContactSection />
        </div>
    }
}
