use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::navigation::Section;
use crate::sections::contact_bar::ContactBar;

const AUTOPLAY_MS: u32 = 5000;

struct Slide {
    title: &'static str,
    image: &'static str,
}

const SLIDES: &[Slide] = &[
    Slide {
        title: "BIENVENIDO A PAMPA CODE !",
        image: "/assets/hero-bg-1.jpg",
    },
    Slide {
        title: "APLICACIONES A TU MEDIDA",
        image: "/assets/hero-bg-2.jpg",
    },
    Slide {
        title: "POTENCIA TU NEGOCIO CON TECNOLOGÍA",
        image: "/assets/hero-bg-3.jpg",
    },
];

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + len - 1) % len
    }
}

pub enum CarouselAction {
    Next,
    Prev,
    GoTo(usize),
}

#[derive(Default, PartialEq)]
struct CarouselState {
    selected: usize,
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let len = SLIDES.len();
        let selected = match action {
            CarouselAction::Next => next_index(self.selected, len),
            CarouselAction::Prev => prev_index(self.selected, len),
            CarouselAction::GoTo(index) if index < len => index,
            CarouselAction::GoTo(_) => self.selected,
        };
        Rc::new(Self { selected })
    }
}

#[derive(Properties, PartialEq)]
pub struct HeroCarouselProps {
    pub on_faq_click: Callback<()>,
}

#[function_component(HeroCarousel)]
pub fn hero_carousel(props: &HeroCarouselProps) -> Html {
    let carousel = use_reducer(CarouselState::default);

    // Autoplay keeps running after manual navigation
    {
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |_| {
                let interval = Interval::new(AUTOPLAY_MS, move || carousel.dispatch(CarouselAction::Next));
                move || drop(interval)
            },
            (),
        );
    }

    let go = |action: fn() -> CarouselAction| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(action()))
    };
    let go_to = |index: usize| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::GoTo(index)))
    };

    html! {
        <section id={Section::Inicio.anchor()} class="hero">
            <style>
                {r#"
                .hero {
                    position: relative;
                    width: 100%;
                    height: 70vh;
                    min-height: 420px;
                    overflow: hidden;
                }
                .hero-track {
                    display: flex;
                    height: 100%;
                    transition: transform 0.6s ease;
                }
                .hero-slide {
                    position: relative;
                    flex: 0 0 100%;
                    height: 100%;
                    background-size: cover;
                    background-position: center;
                }
                .hero-slide::before {
                    content: '';
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to right, rgba(8, 47, 92, 0.85), rgba(21, 101, 192, 0.6));
                }
                .hero-content {
                    position: relative;
                    z-index: 1;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100%;
                    padding: 0 2rem;
                    text-align: center;
                    color: #fff;
                }
                .hero-logo {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 5rem;
                    height: 5rem;
                    margin-bottom: 1.5rem;
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    font-size: 1.8rem;
                    font-weight: 700;
                }
                .hero-brand {
                    margin: 0 0 0.5rem 0;
                    font-size: 1.8rem;
                }
                .hero-tagline {
                    margin: 0 0 2rem 0;
                    font-size: 0.85rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    opacity: 0.8;
                }
                .hero-title {
                    max-width: 56rem;
                    margin: 0;
                    font-size: clamp(2rem, 5vw, 3.75rem);
                    font-weight: 800;
                    line-height: 1.1;
                    text-shadow: 0 4px 12px rgba(0, 0, 0, 0.3);
                }
                .hero-arrow {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    z-index: 2;
                    width: 3rem;
                    height: 3rem;
                    border: none;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.1);
                    color: #fff;
                    font-size: 1.4rem;
                    cursor: pointer;
                }
                .hero-arrow.prev { left: 1rem; }
                .hero-arrow.next { right: 1rem; }
                .hero-dots {
                    position: absolute;
                    bottom: 5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 2;
                    display: flex;
                    gap: 0.5rem;
                }
                .hero-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    padding: 0;
                    border: none;
                    border-radius: 999px;
                    background: rgba(255, 255, 255, 0.4);
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .hero-dot.selected {
                    width: 2rem;
                    background: #fff;
                }
                "#}
            </style>
            <div class="hero-track" style={format!("transform: translateX(-{}%);", carousel.selected * 100)}>
                { for SLIDES.iter().map(|slide| html! {
                    <div class="hero-slide" style={format!("background-image: url('{}');", slide.image)}>
                        <div class="hero-content">
                            <div class="hero-logo">{"<>"}</div>
                            <h2 class="hero-brand">{"PampaCode"}</h2>
                            <p class="hero-tagline">{"Software Development"}</p>
                            <h1 class="hero-title">{slide.title}</h1>
                        </div>
                    </div>
                })}
            </div>

            <button class="hero-arrow prev" aria-label="Slide anterior" onclick={go(|| CarouselAction::Prev)}>{"‹"}</button>
            <button class="hero-arrow next" aria-label="Siguiente slide" onclick={go(|| CarouselAction::Next)}>{"›"}</button>

            <div class="hero-dots">
                { for (0..SLIDES.len()).map(|index| html! {
                    <button
                        class={classes!("hero-dot", (carousel.selected == index).then(|| "selected"))}
                        aria-label={format!("Ir a slide {}", index + 1)}
                        onclick={go_to(index)}
                    />
                })}
            </div>

            <ContactBar on_faq_click={props.on_faq_click.clone()} overlay=true />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_wrap_in_both_directions() {
        assert_eq!(next_index(0, 3), 1);
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(prev_index(0, 3), 2);
        assert_eq!(prev_index(1, 3), 0);
    }

    #[test]
    fn empty_carousel_stays_at_zero() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
    }

    #[test]
    fn reducer_ignores_out_of_range_jumps() {
        let state = Rc::new(CarouselState { selected: 1 });
        let state = state.reduce(CarouselAction::GoTo(SLIDES.len()));
        assert_eq!(state.selected, 1);
        let state = state.reduce(CarouselAction::GoTo(0));
        assert_eq!(state.selected, 0);
        let state = state.reduce(CarouselAction::Prev);
        assert_eq!(state.selected, SLIDES.len() - 1);
    }
}
