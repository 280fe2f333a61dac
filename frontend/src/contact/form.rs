use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};
use yew::create_portal;
use yew::prelude::*;

use super::fields::{Field, FormFields};
use super::navigator::WindowNavigator;
use super::pipeline::SubmissionPipeline;
use super::scheduler::TimeoutScheduler;
use super::surface::{BannerId, RenderSurface};

const ERROR_COLOR: &str = "#E74C3C";

#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub id: BannerId,
    pub text: String,
    pub leaving: bool,
}

/// Everything the contact form renders on top of its plain inputs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormView {
    pub errors: Vec<(Field, String)>,
    pub banners: Vec<Banner>,
}

impl FormView {
    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, text)| text.as_str())
    }
}

pub enum FormAction {
    ClearErrors,
    InsertError(Field, String),
    ShowBanner(BannerId, String),
    LeaveBanner(BannerId),
    RemoveBanner(BannerId),
}

impl Reducible for FormView {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut view = (*self).clone();
        match action {
            FormAction::ClearErrors => view.errors.clear(),
            FormAction::InsertError(field, text) => view.errors.push((field, text)),
            FormAction::ShowBanner(id, text) => view.banners.push(Banner {
                id,
                text,
                leaving: false,
            }),
            FormAction::LeaveBanner(id) => {
                if let Some(banner) = view.banners.iter_mut().find(|b| b.id == id) {
                    banner.leaving = true;
                }
            }
            FormAction::RemoveBanner(id) => view.banners.retain(|b| b.id != id),
        }
        view.into()
    }
}

/// Reads the uncontrolled inputs through node refs and renders through the
/// form's reducer.
#[derive(Clone)]
struct FormSurface {
    form: NodeRef,
    name: NodeRef,
    email: NodeRef,
    phone: NodeRef,
    message: NodeRef,
    view: UseReducerDispatcher<FormView>,
    next_banner: Rc<RefCell<u64>>,
}

impl FormSurface {
    fn node(&self, field: Field) -> &NodeRef {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }
}

fn control_value(node: &NodeRef) -> String {
    if let Some(input) = node.cast::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = node.cast::<HtmlTextAreaElement>() {
        return area.value();
    }
    warn!("Contact form control is not mounted");
    String::new()
}

impl RenderSurface for FormSurface {
    fn read_fields(&self) -> FormFields {
        let mut fields = FormFields::default();
        for field in Field::ALL {
            fields.set(field, control_value(self.node(field)));
        }
        fields
    }

    fn clear_errors(&self) {
        self.view.dispatch(FormAction::ClearErrors);
    }

    fn insert_error(&self, field: Field, message: &str) {
        self.view
            .dispatch(FormAction::InsertError(field, message.to_string()));
    }

    fn reset_fields(&self) {
        match self.form.cast::<HtmlFormElement>() {
            Some(form) => form.reset(),
            None => warn!("Contact form is not mounted, cannot reset it"),
        }
    }

    fn show_banner(&self, message: &str) -> BannerId {
        let id = {
            let mut next = self.next_banner.borrow_mut();
            *next += 1;
            BannerId(*next)
        };
        self.view
            .dispatch(FormAction::ShowBanner(id, message.to_string()));
        id
    }

    fn begin_banner_exit(&self, id: BannerId) {
        self.view.dispatch(FormAction::LeaveBanner(id));
    }

    fn remove_banner(&self, id: BannerId) {
        self.view.dispatch(FormAction::RemoveBanner(id));
    }
}

fn render_banner(banner: &Banner) -> Html {
    let animation = if banner.leaving {
        "slideOut 0.3s ease forwards"
    } else {
        "slideIn 0.3s ease"
    };
    let style = format!(
        "position: fixed; top: 20px; right: 20px; background: #2ECC71; color: white; \
         padding: 1rem 1.5rem; border-radius: 8px; box-shadow: 0 4px 16px rgba(0,0,0,0.2); \
         z-index: 9999; animation: {};",
        animation
    );
    html! {
        <div key={banner.id.0.to_string()} class="success-message" style={style}>
            { &banner.text }
        </div>
    }
}

fn render_error(view: &FormView, field: Field) -> Html {
    match view.error_for(field) {
        Some(text) => html! {
            <div class="error-message" style={format!("color: {}; font-size: 0.875rem; margin-top: 0.25rem;", ERROR_COLOR)}>
                { text }
            </div>
        },
        None => html! {},
    }
}

fn border_style(view: &FormView, field: Field) -> Option<AttrValue> {
    view.error_for(field)
        .map(|_| AttrValue::from(format!("border-color: {};", ERROR_COLOR)))
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let view = use_reducer(FormView::default);
    let next_banner = use_mut_ref(|| 0u64);
    let form_ref = use_node_ref();
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let message_ref = use_node_ref();

    let onsubmit = {
        let surface = FormSurface {
            form: form_ref.clone(),
            name: name_ref.clone(),
            email: email_ref.clone(),
            phone: phone_ref.clone(),
            message: message_ref.clone(),
            view: view.dispatcher(),
            next_banner,
        };
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let pipeline = SubmissionPipeline::new(
                Rc::new(surface.clone()),
                WindowNavigator,
                Rc::new(TimeoutScheduler),
            );
            pipeline.submit();
        })
    };

    let banners = html! { <>{ for view.banners.iter().map(render_banner) }</> };
    let banners = match web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        Some(body) => create_portal(banners, body.into()),
        None => banners,
    };

    html! {
        <form id="contact-form" class="contact-form" ref={form_ref} {onsubmit} novalidate=true>
            <div class="form-group">
                <label for="name">{"Nome"}</label>
                <input id="name" name="name" type="text" placeholder="Seu nome"
                    ref={name_ref} style={border_style(&view, Field::Name)} />
                { render_error(&view, Field::Name) }
            </div>
            <div class="form-group">
                <label for="email">{"Email"}</label>
                <input id="email" name="email" type="email" placeholder="seu@email.com"
                    ref={email_ref} style={border_style(&view, Field::Email)} />
                { render_error(&view, Field::Email) }
            </div>
            <div class="form-group">
                <label for="phone">{"Telefone"}</label>
                <input id="phone" name="phone" type="tel" placeholder="(47) 99999-9999"
                    ref={phone_ref} style={border_style(&view, Field::Phone)} />
                { render_error(&view, Field::Phone) }
            </div>
            <div class="form-group">
                <label for="message">{"Mensagem"}</label>
                <textarea id="message" name="message" rows="5" placeholder="Conte o que você precisa"
                    ref={message_ref} style={border_style(&view, Field::Message)} />
                { render_error(&view, Field::Message) }
            </div>
            <button type="submit" class="btn-primary">{"Enviar pelo WhatsApp"}</button>
            { banners }
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(view: FormView, actions: Vec<FormAction>) -> FormView {
        let mut view = Rc::new(view);
        for action in actions {
            view = view.reduce(action);
        }
        (*view).clone()
    }

    #[test]
    fn clearing_drops_every_error() {
        let view = reduce(
            FormView::default(),
            vec![
                FormAction::InsertError(Field::Name, "nome".into()),
                FormAction::InsertError(Field::Phone, "telefone".into()),
                FormAction::ClearErrors,
                FormAction::InsertError(Field::Email, "email".into()),
            ],
        );
        assert_eq!(view.error_for(Field::Name), None);
        assert_eq!(view.error_for(Field::Phone), None);
        assert_eq!(view.error_for(Field::Email), Some("email"));
    }

    #[test]
    fn banners_are_independent() {
        let view = reduce(
            FormView::default(),
            vec![
                FormAction::ShowBanner(BannerId(1), "um".into()),
                FormAction::ShowBanner(BannerId(2), "dois".into()),
                FormAction::LeaveBanner(BannerId(1)),
            ],
        );
        assert_eq!(view.banners.len(), 2);
        assert!(view.banners[0].leaving);
        assert!(!view.banners[1].leaving);

        let view = reduce(view, vec![FormAction::RemoveBanner(BannerId(1))]);
        assert_eq!(
            view.banners,
            vec![Banner {
                id: BannerId(2),
                text: "dois".into(),
                leaving: false
            }]
        );
    }

    #[test]
    fn errored_field_gets_red_border_until_cleared() {
        let view = reduce(
            FormView::default(),
            vec![FormAction::InsertError(Field::Phone, "telefone".into())],
        );
        assert_eq!(
            border_style(&view, Field::Phone),
            Some(AttrValue::from("border-color: #E74C3C;"))
        );
        assert_eq!(border_style(&view, Field::Name), None);

        let view = reduce(view, vec![FormAction::ClearErrors]);
        for field in Field::ALL {
            assert_eq!(border_style(&view, field), None);
        }
    }

    #[test]
    fn unknown_banner_ids_are_ignored() {
        let view = reduce(
            FormView::default(),
            vec![
                FormAction::LeaveBanner(BannerId(9)),
                FormAction::RemoveBanner(BannerId(9)),
            ],
        );
        assert_eq!(view, FormView::default());
    }
}
