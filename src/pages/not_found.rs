use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>
                {r#"
                .not-found {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: 100vh;
                    gap: 1rem;
                    background: #f1f5f9;
                    color: #0f172a;
                    font-family: system-ui, sans-serif;
                }
                .not-found h1 {
                    margin: 0;
                    font-size: 2.25rem;
                }
                .not-found p {
                    margin: 0;
                    color: #64748b;
                    font-size: 1.1rem;
                }
                .not-found a {
                    color: #1565c0;
                }
                "#}
            </style>
            <h1>{"404"}</h1>
            <p>{"¡Ups! Página no encontrada"}</p>
            <Link<Route> to={Route::Home}>{"Volver al inicio"}</Link<Route>>
        </div>
    }
}
