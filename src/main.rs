//! Main module for the Stack Calculator widget using Yew.
//! Loads configuration, installs logging and mounts the calculator.

use log::{info, warn, LevelFilter};
use stack_calculator::config::{ConfigError, WidgetConfig, CONFIG_ELEMENT_ID};
use stack_calculator::slots::IconKind;
use std::rc::Rc;
use yew::prelude::*;

mod assets;
mod components;
mod hooks;
mod logging;

use assets::{preload_images, HoverSound};
use components::{AmountForm, ResultPanel};
use hooks::use_stack_calculator;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<WidgetConfig>,
}

/// Primary component wiring calculator state, asset effects and UI elements.
#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let config = props.config.clone();
    let calc = use_stack_calculator();

    // Warm the browser cache once on mount
    {
        let config = config.clone();
        use_effect_with((), move |_| {
            preload_images(&[config.full_stack_icon.as_str(), config.leftover_icon.as_str()]);
            info!("stack calculator mounted (hover sound: {})", config.hover_sound);
            || ()
        });
    }

    let hover_sound = use_memo(
        (config.hover_sound, config.hover_sound_src.clone()),
        |(enabled, src)| if *enabled { HoverSound::new(src) } else { None },
    );
    let onhover = (*hover_sound)
        .clone()
        .map(|sound| Callback::from(move |_: ()| sound.play()));

    html! {
        <div class="container">
            <div class="card">
                <h1>{ config.heading.clone() }</h1>
                <p class="tagline">{ config.tagline.clone() }</p>

                <AmountForm
                    value={AttrValue::from(calc.state.raw_input().to_string())}
                    oninput={calc.on_input.clone()}
                    onsubmit={calc.on_submit.clone()}
                />

                if let Some(shown) = calc.state.visible_display() {
                    <ResultPanel
                        phase={calc.state.phase()}
                        message={AttrValue::from(shown.result_message.clone())}
                        full_stacks={calc.state.slots(IconKind::FullStack)}
                        leftover={calc.state.slots(IconKind::Leftover)}
                        full_stack_icon={AttrValue::from(config.full_stack_icon.clone())}
                        leftover_icon={AttrValue::from(config.leftover_icon.clone())}
                        onload={calc.on_icon_load.clone()}
                        {onhover}
                    />
                }
            </div>
        </div>
    }
}

/// Read the optional JSON config block embedded in the page.
fn read_config() -> Result<WidgetConfig, ConfigError> {
    match gloo_utils::document().get_element_by_id(CONFIG_ELEMENT_ID) {
        Some(element) => WidgetConfig::from_json(&element.text_content().unwrap_or_default()),
        None => Ok(WidgetConfig::default()),
    }
}

/// Entry point: initializes logging and the Yew renderer for the App component.
fn main() {
    console_error_panic_hook::set_once();

    let (config, problem) = match read_config() {
        Ok(config) => (config, None),
        Err(e) => (WidgetConfig::default(), Some(e)),
    };
    logging::init(config.level_filter().unwrap_or(LevelFilter::Info));
    if let Some(e) = problem {
        warn!("{}; falling back to defaults", e);
    }

    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
    })
    .render();
}
