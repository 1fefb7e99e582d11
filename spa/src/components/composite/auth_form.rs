use shared::{AuthForm as AuthFormState, AuthFormError, Field, FormMode, Role};
use yew::prelude::*;

use crate::components::atoms::{
    input_text::{InputText, InputType},
    toggle_switch::ToggleSwitch,
};

#[derive(PartialEq, Properties)]
pub struct Props {
    pub form: AuthFormState,
    pub error: Option<AuthFormError>,
    pub on_change: Callback<AuthFormState>,
    pub on_submit: Callback<()>,
}

fn render_role_picker(props: &Props) -> Html {
    let pick = |role: Role| {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            let mut data = form.clone();
            data.role = Some(role);
            on_change.emit(data);
        })
    };
    html! {
        <div class="d-flex justify-content-center gap-3 mb-4">
            <button type="button" class="btn btn-outline-light rounded-pill px-4" onclick={pick(Role::Seeker)}>
                {"Job Seeker"}
            </button>
            <button type="button" class="btn btn-outline-light rounded-pill px-4" onclick={pick(Role::Hirer)}>
                {"Job Hirer"}
            </button>
        </div>
    }
}

fn field_input(props: &Props, field: Field, input_type: InputType, placeholder: &str) -> Html {
    let on_change = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |text: String| {
            let mut data = form.clone();
            match field {
                Field::Phone => data.phone = text,
                Field::Password => data.password = text,
                Field::ConfirmPassword => data.confirm_password = text,
                Field::ServiceOffered => data.service_offered = text,
            }
            on_change.emit(data);
        })
    };
    let invalid = matches!(&props.error, Some(AuthFormError::MissingFields(fields)) if fields.contains(&field));
    let classes = if invalid {
        classes!("form-control", "form-control-lg", "is-invalid")
    } else {
        classes!("form-control", "form-control-lg")
    };
    html! {
        <div class="mb-3">
            <InputText
                id={field.as_ref().to_owned()}
                name={field.as_ref().to_owned()}
                value={props.form.value(field).to_owned()}
                placeholder={placeholder.to_owned()}
                input_type={input_type}
                class={classes}
                required={true}
                on_change={on_change} />
            if invalid {
                <div class="invalid-feedback">{"This field is required"}</div>
            }
        </div>
    }
}

#[function_component(AuthForm)]
pub fn auth_form(props: &Props) -> Html {
    if props.form.role.is_none() {
        return render_role_picker(props);
    }

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_submit.emit(());
        })
    };

    let on_available_change = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |available: bool| {
            let mut data = form.clone();
            data.available = available;
            on_change.emit(data);
        })
    };

    html! {
        <form onsubmit={on_submit}>
            {field_input(props, Field::Phone, InputType::Tel, "Phone Number")}
            {field_input(props, Field::Password, InputType::Password, "Password")}
            if props.form.mode == FormMode::SignUp {
                {field_input(props, Field::ConfirmPassword, InputType::Password, "Confirm Password")}
            }
            if props.form.role == Some(Role::Seeker) {
                {field_input(props, Field::ServiceOffered, InputType::Text, "Service Provided (e.g., Plumbing, Carpentry)")}
                <div class="mb-3">
                    <ToggleSwitch
                        name="available"
                        label="Available for work"
                        checked={props.form.available}
                        on_change={on_available_change} />
                </div>
            }
            <div class="d-grid">
                <input class="btn btn-primary btn-lg rounded-pill" type="submit" value={props.form.submit_label()} />
            </div>
        </form>
    }
}
