use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="site-footer">
            <div>"Connectly: Bringing Volunteers and Organizations Together."</div>
            <div class="copyright">"© " {year} " Connectly"</div>
        </footer>
    }
}
