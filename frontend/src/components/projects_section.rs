use yew::prelude::*;

use crate::components::welcome_section::VideoBlock;
use crate::config;

#[derive(Properties, PartialEq)]
pub struct ProjectsSectionProps {
    pub is_visible: bool,
}

#[function_component(ProjectsSection)]
pub fn projects_section(props: &ProjectsSectionProps) -> Html {
    let reveal = if props.is_visible {
        "opacity: 1; transform: translateY(0);"
    } else {
        "opacity: 0; transform: translateY(20px);"
    };

    html! {
        <section id="projects" class="projects-section">
            <div class="card">
                <div class="project-grid" style={reveal}>
                    <div class="project">
                        <VideoBlock class="project-video" video_src={AttrValue::from(config::PROJECT_VIDEO)} delay={0.6} />
                        <div class="project-title wobble">{"C🍽️🍪king"}</div>
                    </div>
                </div>
            </div>
        </section>
    }
}
