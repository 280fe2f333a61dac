use yew::prelude::*;
use log::info;

mod config;
mod components {
    pub mod anchor;
    pub mod lazy_image;
    pub mod lightbox;
    pub mod nav;
    pub mod observer;
    pub mod reveal;
}
mod contact {
    pub mod fields;
    pub mod form;
    pub mod message;
    pub mod navigator;
    pub mod pipeline;
    pub mod scheduler;
    pub mod surface;
    pub mod validation;
    #[cfg(test)]
    pub mod testing;
}
mod pages {
    pub mod home;
}

use components::nav::Nav;
use pages::home::Home;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <style>
                {r#"
                    .fade-in {
                        animation: fadeInUp 0.6s ease forwards;
                    }
                    @keyframes fadeInUp {
                        from {
                            opacity: 0;
                            transform: translateY(30px);
                        }
                        to {
                            opacity: 1;
                            transform: translateY(0);
                        }
                    }
                    @keyframes slideIn {
                        from {
                            transform: translateX(400px);
                            opacity: 0;
                        }
                        to {
                            transform: translateX(0);
                            opacity: 1;
                        }
                    }
                    @keyframes slideOut {
                        from {
                            transform: translateX(0);
                            opacity: 1;
                        }
                        to {
                            transform: translateX(400px);
                            opacity: 0;
                        }
                    }
                "#}
            </style>
            <Nav />
            <Home />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting Magia Total site");
    yew::Renderer::<App>::new().render();
}
