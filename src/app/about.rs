use leptos::prelude::*;

use super::glyph::Glyph;
use crate::{
    content::{Icon, ABOUT_ANCHOR, CV_PATH, OWNER, PORTFOLIO_HREF, PROFILE_IMAGE_PATH},
    stats::{stat_cards, KeyedCache, StatCard, StatisticSummary},
};

#[component]
pub fn About() -> impl IntoView {
    let (summary, set_summary) = signal(StatisticSummary::default());
    let cards = StoredValue::new(KeyedCache::<StatisticSummary, Vec<StatCard>>::new());

    // localStorage only exists in the browser, so counts are read once after hydration
    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        use crate::{lifecycle::AboutLifecycle, reveal::Aos, store::LocalStorage};

        let about = AboutLifecycle::mount(&LocalStorage, &Aos);
        set_summary.set(about.summary());
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = set_summary;

    let stat_views = move || {
        let summary = summary.get();
        cards
            .try_update_value(|cache| cache.get_or_compute(summary, stat_cards).clone())
            .unwrap_or_default()
            .into_iter()
            .map(|card| view! { <StatCardView card /> })
            .collect_view()
    };

    view! {
        <div
            class="h-auto pb-[10%] text-white overflow-hidden px-[5%] sm:px-[5%] lg:px-[10%] mt-10 sm-mt-0"
            id=ABOUT_ANCHOR
        >
            <Header />
            <div class="w-full mx-auto pt-8 sm:pt-12 relative">
                <div class="flex flex-col-reverse lg:grid lg:grid-cols-2 gap-10 lg:gap-16 items-center">
                    <Introduction />
                    <ProfileImage />
                </div>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mt-16">{stat_views}</div>
            </div>
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <div class="text-center lg:mb-8 mb-2 px-[5%]">
            <div class="inline-block relative group">
                <h2
                    class="text-4xl md:text-5xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-[#850e35] to-[#ee6983]"
                    data-aos="zoom-in-up"
                    data-aos-duration="600"
                >
                    "About Me"
                </h2>
            </div>
            <p
                class="mt-2 text-gray-400 max-w-2xl mx-auto text-base sm:text-lg flex items-center justify-center gap-2"
                data-aos="zoom-in-up"
                data-aos-duration="800"
            >
                <Glyph icon=Icon::Sparkles class="w-5 h-5 text-[#ee6983]" />
                "Transforming ideas into reliable and secure digital systems"
                <Glyph icon=Icon::Sparkles class="w-5 h-5 text-[#ee6983]" />
            </p>
        </div>
    }
}

#[component]
fn Introduction() -> impl IntoView {
    view! {
        <div class="space-y-6 text-center lg:text-left">
            <h2 class="text-3xl sm:text-4xl lg:text-5xl font-bold">
                <span class="text-transparent bg-clip-text bg-gradient-to-r from-[#850e35] to-[#ee6983]">
                    "Hello, I'm"
                </span>
                <span class="block mt-2 text-gray-200">{OWNER}</span>
            </h2>
            <p class="text-base sm:text-lg lg:text-xl text-gray-400 leading-relaxed text-justify">
                "Mahasiswa Teknik Informatika semester 6 yang tertarik pada pengembangan sistem, keamanan data, dan aplikasi mobile/web. "
                "Saya terbiasa menangani proyek end-to-end mulai dari perancangan, implementasi, hingga dokumentasi. "
                "Fokus saya adalah menciptakan solusi digital yang andal, aman, dan scalable."
            </p>
            <div class="relative bg-gradient-to-br from-[#850e35]/5 via-transparent to-[#ee6983]/5 border border-[#ee6983]/30 rounded-2xl p-4 my-6 backdrop-blur-md shadow-2xl">
                <blockquote class="text-gray-300 italic text-sm">
                    "\"Engineering solutions that are reliable, secure, and user-centric.\""
                </blockquote>
            </div>
            <div class="flex flex-col lg:flex-row gap-4">
                <a
                    href=CV_PATH
                    download="CV_ATS_SilfaSalsaBilaPutri.pdf"
                    class="sm:px-6 py-2 sm:py-3 rounded-lg bg-gradient-to-r from-[#850e35] to-[#ee6983] text-white font-medium hover:scale-105 transition flex items-center gap-2"
                >
                    <Glyph icon=Icon::FileText class="w-4 h-4 inline mr-2" />
                    "Download CV"
                </a>
                <a
                    href=PORTFOLIO_HREF
                    class="sm:px-6 py-2 sm:py-3 rounded-lg border border-[#ee6983]/50 text-[#ee6983] hover:bg-[#ee6983]/10 transition flex items-center gap-2"
                >
                    <Glyph icon=Icon::Code class="w-4 h-4 inline mr-2" />
                    "View Projects"
                </a>
            </div>
        </div>
    }
}

#[component]
fn ProfileImage() -> impl IntoView {
    view! {
        <div class="flex justify-end items-center sm:p-12 sm:py-0 sm:pb-0 p-0 py-2 pb-2">
            <div class="relative group" data-aos="fade-up" data-aos-duration="1000">
                <div class="absolute -inset-6 opacity-[25%] z-0 hidden sm:block">
                    <div class="absolute inset-0 bg-gradient-to-r from-[#850e35] via-[#ee6983] to-[#ffc4c4] rounded-full blur-2xl animate-spin-slower" />
                    <div class="absolute inset-0 bg-gradient-to-l from-[#ee6983] via-[#ffc4c4] to-[#850e35] rounded-full blur-2xl animate-pulse-slow opacity-50" />
                    <div class="absolute inset-0 bg-gradient-to-t from-[#850e35] via-[#ee6983] to-[#ffc4c4] rounded-full blur-2xl animate-float opacity-50" />
                </div>
                <div class="relative">
                    <div class="w-72 h-72 sm:w-80 sm:h-80 rounded-full overflow-hidden shadow-[0_0_40px_rgba(238,105,131,0.35)] transform transition-all duration-700 group-hover:scale-105">
                        <div class="absolute inset-0 border-4 border-white/20 rounded-full z-20 transition-all duration-700 group-hover:border-white/40 group-hover:scale-105" />
                        <div class="absolute inset-0 bg-gradient-to-b from-black/20 via-transparent to-black/40 z-10 transition-opacity duration-700 group-hover:opacity-0 hidden sm:block" />
                        <div class="absolute inset-0 bg-gradient-to-t from-[#ee6983]/20 via-transparent to-[#850e35]/20 z-10 opacity-0 group-hover:opacity-100 transition-opacity duration-700 hidden sm:block" />
                        <img
                            src=PROFILE_IMAGE_PATH
                            alt="Profile"
                            class="w-full h-full object-cover transition-all duration-700 group-hover:scale-110 group-hover:rotate-2"
                            loading="lazy"
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn StatCardView(card: StatCard) -> impl IntoView {
    let gradient = format!(
        "absolute -z-10 inset-0 bg-gradient-to-br {} opacity-10 group-hover:opacity-20 transition-opacity duration-300",
        card.gradient,
    );
    view! {
        <div data-aos=card.animation data-aos-duration="1300" class="relative group">
            <div class="relative z-10 bg-gray-900/50 backdrop-blur-lg rounded-2xl p-6 border border-white/10 overflow-hidden transition-all duration-300 hover:scale-105 hover:shadow-2xl h-full flex flex-col justify-between">
                <div class=gradient />
                <div class="flex items-center justify-between mb-4">
                    <div class="w-16 h-16 rounded-full flex items-center justify-center bg-white/10 transition-transform group-hover:rotate-6">
                        <Glyph icon=card.icon class="w-8 h-8 text-[#fff5e4]" />
                    </div>
                    <span class="text-4xl font-bold text-[#fff5e4]">{card.value}</span>
                </div>
                <div>
                    <p class="text-sm uppercase tracking-wider text-gray-300 mb-2">{card.label}</p>
                    <div class="flex items-center justify-between">
                        <p class="text-xs text-gray-400">{card.description}</p>
                        <Glyph
                            icon=Icon::ArrowUpRight
                            class="w-4 h-4 text-white/50 group-hover:text-[#fff5e4] transition-colors"
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}
