use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="btn-ghost">
                {"Back to home"}
            </Link<Route>>
            <style>
                {r#"
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 24px;
                    text-align: center;
                }
                .not-found h1 {
                    font-family: 'Cormorant Garamond', serif;
                    font-size: 6rem;
                    font-weight: 300;
                    color: var(--gold, #c9a96e);
                    margin: 0;
                }
                "#}
            </style>
        </div>
    }
}
