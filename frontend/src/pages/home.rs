use yew::prelude::*;

use crate::components::anchor::AnchorLink;
use crate::components::lightbox::{Gallery, GalleryImage};
use crate::components::reveal::use_reveal;
use crate::contact::form::ContactForm;

#[derive(Properties, PartialEq)]
struct FeatureCardProps {
    icon: AttrValue,
    title: AttrValue,
    text: AttrValue,
}

#[function_component(FeatureCard)]
fn feature_card(props: &FeatureCardProps) -> Html {
    let card_ref = use_node_ref();
    use_reveal(card_ref.clone());

    html! {
        <div class="feature-card" ref={card_ref}>
            <div class="feature-icon">{ props.icon.clone() }</div>
            <h3>{ props.title.clone() }</h3>
            <p>{ props.text.clone() }</p>
        </div>
    }
}

fn gallery_images() -> Vec<GalleryImage> {
    vec![
        GalleryImage::new("/assets/gallery/evento-1.jpg", "Decoração de evento"),
        GalleryImage::new("/assets/gallery/evento-2.jpg", "Mesa de doces"),
        GalleryImage::new("/assets/gallery/evento-3.jpg", "Espaço infantil"),
        GalleryImage::new("/assets/gallery/evento-4.jpg", "Show de mágica"),
        GalleryImage::new("/assets/gallery/evento-5.jpg", "Convidados se divertindo"),
        GalleryImage::new("/assets/gallery/evento-6.jpg", "Encerramento da festa"),
    ]
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="landing-page">
            <header class="hero" id="home">
                <div class="hero-content">
                    <h1>{"Magia Total"}</h1>
                    <p class="hero-subtitle">
                        {"Transformamos o seu evento em um momento inesquecível."}
                    </p>
                    <AnchorLink href="#contact" class="hero-cta">
                        {"Fale conosco"}
                    </AnchorLink>
                </div>
            </header>

            <section class="features" id="features">
                <h2>{"Nossos serviços"}</h2>
                <div class="feature-grid">
                    <FeatureCard icon="🎩" title="Shows de mágica"
                        text="Apresentações para todas as idades, do aniversário ao evento corporativo." />
                    <FeatureCard icon="🎈" title="Festas completas"
                        text="Decoração, recreação e animação cuidadas do começo ao fim." />
                    <FeatureCard icon="⭐" title="Atendimento próximo"
                        text="Montamos cada proposta junto com você, pelo WhatsApp." />
                </div>
            </section>

            <section class="gallery" id="gallery">
                <h2>{"Galeria"}</h2>
                <Gallery images={gallery_images()} />
            </section>

            <section class="contact" id="contact">
                <h2>{"Contato"}</h2>
                <p>{"Preencha o formulário e continue a conversa pelo WhatsApp."}</p>
                <ContactForm />
            </section>

            <footer class="footer">
                <p>{"© Magia Total"}</p>
            </footer>
        </div>
    }
}
