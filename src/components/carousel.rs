use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::utils::constants::CAROUSEL_INTERVAL_MS;

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub images: Vec<String>,
    #[prop_or_default]
    pub alt: String,
}

/// Advance the slide cursor, wrapping past the last image.
fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let index = use_state(|| 0usize);

    // Restart the timer whenever the image set changes. The interval closure
    // keeps its own cursor so it never reads a stale handle.
    {
        let index = index.clone();
        use_effect_with(props.images.clone(), move |images| {
            index.set(0);
            let interval = if images.len() > 1 {
                let len = images.len();
                let mut current = 0usize;
                Some(Interval::new(CAROUSEL_INTERVAL_MS, move || {
                    current = next_index(current, len);
                    index.set(current);
                }))
            } else {
                None
            };
            move || drop(interval)
        });
    }

    if props.images.is_empty() {
        return html! {
            <div class="carousel carousel-empty">{"No images to display"}</div>
        };
    }

    let current = (*index).min(props.images.len() - 1);

    html! {
        <div class="carousel">
            <img src={props.images[current].clone()} alt={props.alt.clone()} />
            <div class="carousel-dots">
                { for props.images.iter().enumerate().map(|(i, _)| {
                    let class = if i == current { "dot active" } else { "dot" };
                    html! { <span {class}></span> }
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::next_index;

    #[test]
    fn wraps_around_two_images() {
        assert_eq!(next_index(0, 2), 1);
        assert_eq!(next_index(1, 2), 0);
    }

    #[test]
    fn single_image_stays_put() {
        assert_eq!(next_index(0, 1), 0);
    }

    #[test]
    fn empty_set_never_advances() {
        assert_eq!(next_index(0, 0), 0);
    }
}
