use yew::prelude::*;

use crate::components::typewriter_text::TypewriterText;
use crate::config;
use crate::presentation::breakpoints::{Anchor, Breakpoint, Displacement};
use crate::presentation::scroll::WelcomeTransform;

#[derive(Properties, PartialEq)]
pub struct WelcomeSectionProps {
    pub scroll_progress: f64,
    pub breakpoint: Breakpoint,
    #[prop_or(config::HIDE_WELCOME)]
    pub hide_welcome: f64,
}

#[derive(Properties, PartialEq)]
struct AnimatedLetterProps {
    letter: char,
    font_rem: f64,
}

#[function_component(AnimatedLetter)]
fn animated_letter(props: &AnimatedLetterProps) -> Html {
    let is_hovered = use_state(|| false);

    let onmouseenter = {
        let is_hovered = is_hovered.clone();
        Callback::from(move |_: MouseEvent| is_hovered.set(true))
    };
    let onmouseleave = {
        let is_hovered = is_hovered.clone();
        Callback::from(move |_: MouseEvent| is_hovered.set(false))
    };

    let color = if *is_hovered { "#ffffff" } else { "#a8a29e" };

    html! {
        <span
            class="animated-letter"
            style={format!("font-size: {}rem; color: {};", props.font_rem, color)}
            {onmouseenter}
            {onmouseleave}
        >
            { props.letter.to_string() }
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoBlockProps {
    #[prop_or_default]
    pub video_src: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub delay: f64,
}

#[function_component(VideoBlock)]
pub fn video_block(props: &VideoBlockProps) -> Html {
    let style = format!("animation-delay: {}s;", props.delay);
    html! {
        <div class={classes!("video-block", props.class.clone())} {style}>
            {
                if let Some(src) = props.video_src.clone() {
                    html! {
                        <video autoplay=true loop=true muted=true playsinline=true>
                            <source {src} type="video/mp4" />
                            {"Your browser does not support the video tag."}
                        </video>
                    }
                } else {
                    html! { <div class="video-placeholder">{"video"}</div> }
                }
            }
        </div>
    }
}

#[function_component(SocialLinks)]
fn social_links() -> Html {
    html! {
        <div class="social-links">
            { for config::SOCIAL_LINKS.iter().map(|(name, url)| html! {
                <a key={*name} href={*url} target="_blank" rel="noopener noreferrer">
                    <span class="dash">{"—"}</span>
                    <span class="hover-underline">{ *name }</span>
                </a>
            }) }
        </div>
    }
}

fn translate(displacement: Displacement, anchor: Anchor, progress: f64) -> String {
    let (x, y) = displacement.offset(anchor, progress);
    format!("transform: translate({:.2}px, {:.2}px);", x, y)
}

#[function_component(WelcomeSection)]
pub fn welcome_section(props: &WelcomeSectionProps) -> Html {
    let t = WelcomeTransform::at(props.scroll_progress, props.hide_welcome);
    if !t.visible {
        return html! {};
    }

    let p = t.shrink_progress;
    let displacement = props.breakpoint.displacement();
    let font_rem = props.breakpoint.headline_font_rem();
    let taglines: Vec<AttrValue> = config::TAGLINES.iter().map(|line| AttrValue::from(*line)).collect();
    let [silver, robo, astronaut, venera] = config::WELCOME_VIDEOS;

    html! {
        <div
            class={classes!("welcome-section", props.breakpoint.is_compact().then_some("compact"))}
            style={format!("opacity: {:.3}; transform: scale({:.3}); transform-origin: center center;", t.opacity, t.scale)}
        >
            <div
                class="welcome-inner"
                style={format!("transform: translate({:.2}px, {:.2}px);", t.center_x, t.center_y)}
            >
                <div class="drift" style={translate(displacement, Anchor::TopLeftVideo, p)}>
                    <VideoBlock class="top-left" delay={0.0} video_src={AttrValue::from(silver)} />
                </div>
                <div class="drift" style={translate(displacement, Anchor::TopRightVideo, p)}>
                    <VideoBlock class="top-center" delay={0.3} video_src={AttrValue::from(robo)} />
                </div>
                <VideoBlock class="top-right" delay={0.6} video_src={AttrValue::from(astronaut)} />

                <div class="headline drift" style={translate(displacement, Anchor::Headline, p)}>
                    <div class="letters">
                        { for config::HEADLINE.chars().enumerate().map(|(i, letter)| html! {
                            <AnimatedLetter key={i} {letter} {font_rem} />
                        }) }
                    </div>
                    <div class="tagline">
                        <TypewriterText texts={taglines} class="typewriter" />
                    </div>
                </div>

                <div class="drift" style={translate(displacement, Anchor::SocialLinks, p)}>
                    <SocialLinks />
                </div>

                <VideoBlock class="bottom-right" delay={0.6} video_src={AttrValue::from(venera)} />

                <div
                    class="welcome-caption"
                    style={format!("opacity: {:.3}; transform: translateY({:.2}px);", t.caption_opacity, t.caption_y)}
                >
                    {"Reach me out through the mail below -or-"}<br />{"connect with me on social media."}
                </div>

                <div class="scroll-indicator">
                    <span>{"Scroll to explore"}</span>
                    <span class="arrow">{"↓"}</span>
                </div>
            </div>
        </div>
    }
}
