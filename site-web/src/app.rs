//! INTELIK marketing site shell - Leptos frontend
//!
//! Mounts the router with a landing placeholder and the footer at the bottom of every
//! page. Page content beyond the landing hero lives with the page owners.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::components::{provide_motion, Footer, MotionPreference};
use crate::state::{provide_clock, Clock};

#[component]
pub fn App() -> impl IntoView {
    provide_clock(Clock::System);
    let motion = provide_motion(MotionPreference::from_environment());
    log::debug!("motion preference: {:?}", motion);

    view! {
        <Router>
            <div class="page">
                <main class="page-main">
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=Landing/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}

#[component]
fn Landing() -> impl IntoView {
    view! {
        <section class="hero">
            <h1 class="hero-title">"INTELIK"</h1>
            <p class="hero-subtitle">
                "AI automation, blockchain, cloud and software engineering for the enterprise."
            </p>
        </section>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="card not-found">
            <h1>"404 - Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <A href="/">
                <span class="btn">"Go to Home"</span>
            </A>
        </section>
    }
}
