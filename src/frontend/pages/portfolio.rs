use leptos::prelude::*;

use crate::frontend::components::{Footer, Header, MobileNav};
use crate::frontend::sections::{About, Blog, Certifications, Contact, Hero, Projects, Research};

#[component]
pub fn PortfolioPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-slate-950 text-white">
            <Header/>
            <main class="pb-20 md:pb-0">
                <Hero/>
                <About/>
                <Projects/>
                <Research/>
                <Certifications/>
                <Blog/>
                <Contact/>
            </main>
            <Footer/>
            <MobileNav/>
        </div>
    }
}
