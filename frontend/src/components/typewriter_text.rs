use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::presentation::typewriter::Typewriter;

#[derive(Properties, PartialEq)]
pub struct TypewriterTextProps {
    pub texts: Vec<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TypewriterText)]
pub fn typewriter_text(props: &TypewriterTextProps) -> Html {
    let state = use_state(Typewriter::default);

    {
        let handle = state.clone();
        let texts = props.texts.clone();
        use_effect_with_deps(
            move |current: &Typewriter| {
                let refs: Vec<&str> = texts.iter().map(|t| t.as_str()).collect();
                let next = current.tick(&refs);

                // One timer per tick. Dropping the handle cancels it, which
                // happens on the next re-arm or when the component unmounts.
                let timeout = Timeout::new(current.delay_ms(), move || handle.set(next));
                move || drop(timeout)
            },
            (*state).clone(),
        );
    }

    html! {
        <span class={props.class.clone()}>
            { state.current_text.clone() }
            <span class={classes!("typewriter-caret", state.is_deleting().then_some("deleting"))} />
        </span>
    }
}
