use leptos::prelude::*;

use super::glyph::Glyph;
use crate::content::{
    CtaButton, Icon, SocialLink, CTA_BUTTONS, HOME_ANCHOR, ILLUSTRATION_PATH, SOCIAL_LINKS,
    TECH_STACK,
};

#[component]
pub fn Home() -> impl IntoView {
    let (text, set_text) = signal(String::new());
    let (is_loaded, set_is_loaded) = signal(false);

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        use std::rc::Rc;

        use crate::{
            lifecycle::HomeLifecycle,
            reveal::{Aos, BrowserViewport},
            schedule::BrowserScheduler,
        };

        match HomeLifecycle::mount(
            Rc::new(BrowserScheduler),
            Rc::new(Aos),
            &BrowserViewport,
            move |state| set_text.set(state.current_text.clone()),
        ) {
            Ok(lifecycle) => {
                let lifecycle = StoredValue::new_local(Some(lifecycle));
                on_cleanup(move || {
                    if let Some(Some(lifecycle)) = lifecycle.try_update_value(Option::take) {
                        lifecycle.unmount();
                    }
                });
            }
            Err(err) => log::error!("{err}"),
        }
        set_is_loaded.set(true);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (set_text, set_is_loaded);

    view! {
        <div class="min-h-screen bg-[#1a0b12] overflow-hidden px-[5%] sm:px-[5%] lg:px-[10%]" id=HOME_ANCHOR>
            <div class=move || {
                format!(
                    "relative z-10 transition-all duration-1000 {}",
                    if is_loaded.get() { "opacity-100" } else { "opacity-0" },
                )
            }>
                <div class="container mx-auto min-h-screen">
                    <div class="flex flex-col lg:flex-row items-center justify-center h-screen md:justify-between gap-0 sm:gap-12 lg:gap-20">
                        <div class="w-full lg:w-1/2 space-y-6 sm:space-y-8 text-left">
                            <StatusBadge />
                            <MainTitle />
                            <div class="h-8 flex items-center">
                                <span class="text-xl md:text-2xl bg-gradient-to-r from-[#fff5e4] to-[#ffc4c4] bg-clip-text text-transparent font-light">
                                    {text}
                                </span>
                                <span class="w-[3px] h-6 bg-gradient-to-t from-[#ee6983] to-[#850e35] ml-1 animate-blink"></span>
                            </div>
                            <p class="text-base md:text-lg text-gray-400 max-w-xl leading-relaxed font-light">
                                "Membangun Aplikasi dan Sistem yang Efisien, Inovatif, dan Scalable untuk Solusi Digital."
                            </p>
                            <div class="flex flex-wrap gap-3">
                                {TECH_STACK.into_iter().map(|tech| view! { <TechChip tech /> }).collect_view()}
                            </div>
                            <div class="flex gap-3">
                                {CTA_BUTTONS.into_iter().map(|button| view! { <CtaLink button /> }).collect_view()}
                            </div>
                            <div class="hidden sm:flex gap-4">
                                {SOCIAL_LINKS
                                    .into_iter()
                                    .map(|link| view! { <SocialButton link /> })
                                    .collect_view()}
                            </div>
                        </div>
                        <Illustration />
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn StatusBadge() -> impl IntoView {
    view! {
        <div class="inline-block animate-float lg:mx-0" data-aos="zoom-in" data-aos-delay="400">
            <div class="relative group">
                <div class="absolute -inset-0.5 bg-gradient-to-r from-[#850e35] to-[#ee6983] rounded-full blur opacity-30 group-hover:opacity-50 transition duration-1000"></div>
                <div class="relative px-3 sm:px-4 py-2 rounded-full bg-black/40 backdrop-blur-xl border border-white/10">
                    <span class="bg-gradient-to-r from-[#ee6983] to-[#ffc4c4] text-transparent bg-clip-text sm:text-sm text-[0.7rem] font-medium flex items-center">
                        <Glyph icon=Icon::Sparkles class="sm:w-4 sm:h-4 w-3 h-3 mr-2 text-[#ee6983]" />
                        "Ready to Innovate"
                    </span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn MainTitle() -> impl IntoView {
    view! {
        <div class="space-y-2" data-aos="fade-up" data-aos-delay="600">
            <h1 class="text-5xl sm:text-6xl md:text-6xl lg:text-6xl xl:text-7xl font-bold tracking-tight">
                <span class="relative inline-block">
                    <span class="absolute -inset-2 bg-gradient-to-r from-[#850e35] to-[#ee6983] blur-2xl opacity-20"></span>
                    <span class="relative bg-gradient-to-r from-[#fff5e4] via-[#ffc4c4] to-[#ee6983] bg-clip-text text-transparent">
                        "Frontend"
                    </span>
                </span>
                <br />
                <span class="relative inline-block mt-2">
                    <span class="absolute -inset-2 bg-gradient-to-r from-[#850e35] to-[#ee6983] blur-2xl opacity-20"></span>
                    <span class="relative bg-gradient-to-r from-[#850e35] to-[#ee6983] bg-clip-text text-transparent">
                        "Developer"
                    </span>
                </span>
            </h1>
        </div>
    }
}

#[component]
fn TechChip(tech: &'static str) -> impl IntoView {
    view! {
        <div class="px-4 py-2 hidden sm:block rounded-full bg-white/5 backdrop-blur-sm border border-white/10 text-sm text-gray-300 hover:bg-white/10 transition-colors">
            {tech}
        </div>
    }
}

#[component]
fn CtaLink(button: CtaButton) -> impl IntoView {
    let icon_class = format!(
        "w-4 h-4 text-[#fff5e4] {} transform transition-all duration-300 z-10",
        button.hover_motion,
    );
    view! {
        <a href=button.href>
            <button class="group relative w-[160px]">
                <div class="absolute -inset-0.5 bg-gradient-to-r from-[#850e35] to-[#ee6983] rounded-xl opacity-50 blur-md group-hover:opacity-90 transition-all duration-700"></div>
                <div class="relative h-11 bg-[#1a0b12] backdrop-blur-xl rounded-lg border border-white/10 leading-none overflow-hidden">
                    <div class="absolute inset-0 scale-x-0 group-hover:scale-x-100 origin-left transition-transform duration-500 bg-gradient-to-r from-[#850e35]/20 to-[#ee6983]/20"></div>
                    <span class="absolute inset-0 flex items-center justify-center gap-2 text-sm group-hover:gap-3 transition-all duration-300">
                        <span class="bg-gradient-to-r from-[#fff5e4] to-[#ffc4c4] bg-clip-text text-transparent font-medium z-10">
                            {button.label}
                        </span>
                        <Glyph icon=button.icon class=icon_class />
                    </span>
                </div>
            </button>
        </a>
    }
}

#[component]
fn SocialButton(link: SocialLink) -> impl IntoView {
    view! {
        <a href=link.href target="_blank" rel="noopener noreferrer" aria-label=link.label>
            <button class="group relative p-3">
                <div class="absolute inset-0 bg-gradient-to-r from-[#ee6983] to-[#850e35] rounded-xl blur opacity-20 group-hover:opacity-40 transition duration-300"></div>
                <div class="relative rounded-xl bg-black/50 backdrop-blur-xl p-2 flex items-center justify-center border border-white/10 group-hover:border-white/20 transition-all duration-300">
                    <Glyph
                        icon=link.icon
                        class="w-5 h-5 text-gray-400 group-hover:text-[#fff5e4] transition-colors"
                    />
                </div>
            </button>
        </a>
    }
}

#[component]
fn Illustration() -> impl IntoView {
    view! {
        <div class="w-full lg:w-1/2 h-[260px] sm:h-[400px] lg:h-[600px] flex items-center justify-center relative">
            <div class="absolute inset-0 z-0 hidden sm:block">
                <div class="absolute top-10 left-10 w-48 h-48 bg-[#850e35]/40 rounded-full blur-3xl animate-spin-slow" />
                <div class="absolute bottom-20 right-5 w-56 h-56 bg-[#ffc4c4]/30 rounded-full blur-2xl animate-pulse-slow" />
                <div class="absolute top-1/2 left-1/2 w-40 h-40 bg-[#ee6983]/25 rounded-full blur-2xl animate-float -translate-x-1/2 -translate-y-1/2" />
            </div>
            <span class="absolute top-0 left-0 w-32 h-32 bg-gradient-to-r from-[#850e35] via-[#ee6983] to-[#ffc4c4] rounded-full filter blur-3xl animate-blob animation-delay-2000 opacity-70 z-0"></span>
            <span class="absolute bottom-10 right-5 w-40 h-40 bg-gradient-to-r from-[#ffc4c4] via-[#ee6983] to-[#fff5e4] rounded-full filter blur-2xl animate-blob animation-delay-4000 opacity-60 z-0"></span>
            <div class="relative w-full h-full z-10 rounded-xl overflow-hidden shadow-[0_0_60px_rgba(238,105,131,0.35)] transform transition-all duration-700 hover:scale-105">
                <img
                    src=ILLUSTRATION_PATH
                    alt="Engineer Illustration"
                    class="w-full h-full object-contain transition-transform duration-700 hover:scale-110 hover:rotate-1"
                />
            </div>
        </div>
    }
}
