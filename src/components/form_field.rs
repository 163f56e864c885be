use yew::prelude::*;

/// Label, control and inline error for one form field.
pub fn field(label: &str, error: Option<&String>, control: Html) -> Html {
    html! {
        <div class={classes!("form-item", error.is_some().then(|| "has-error"))}>
            <label class="form-label">{label}</label>
            {control}
            if let Some(message) = error {
                <p class="form-message">{message}</p>
            }
        </div>
    }
}

pub fn text_input(
    value: &str,
    placeholder: &str,
    input_type: &'static str,
    disabled: bool,
    oninput: Callback<InputEvent>,
) -> Html {
    html! {
        <input
            class="form-input"
            type={input_type}
            value={value.to_string()}
            placeholder={placeholder.to_string()}
            disabled={disabled}
            oninput={oninput}
        />
    }
}

pub fn text_area(
    value: &str,
    placeholder: &str,
    rows: u32,
    disabled: bool,
    oninput: Callback<InputEvent>,
) -> Html {
    html! {
        <textarea
            class="form-input form-textarea"
            rows={rows.to_string()}
            value={value.to_string()}
            placeholder={placeholder.to_string()}
            disabled={disabled}
            oninput={oninput}
        />
    }
}

pub fn select_input(
    value: &str,
    placeholder: &str,
    options: &[&str],
    disabled: bool,
    onchange: Callback<Event>,
) -> Html {
    html! {
        <select class="form-input form-select" disabled={disabled} onchange={onchange}>
            <option value="" disabled=true selected={value.is_empty()} hidden=true>
                {placeholder}
            </option>
            { for options.iter().map(|option| html! {
                <option value={option.to_string()} selected={*option == value}>
                    {*option}
                </option>
            })}
        </select>
    }
}

pub fn checkbox(label: &str, checked: bool, disabled: bool, onchange: Callback<Event>) -> Html {
    html! {
        <label class="form-checkbox">
            <input type="checkbox" checked={checked} disabled={disabled} onchange={onchange} />
            <span>{label}</span>
        </label>
    }
}

pub const FORM_STYLES: &str = r#"
    .form-grid {
        display: grid;
        grid-template-columns: 1fr;
        gap: 1rem;
    }
    @media (min-width: 640px) {
        .form-grid {
            grid-template-columns: 1fr 1fr;
        }
    }
    .form-item {
        display: flex;
        flex-direction: column;
        gap: 0.4rem;
        margin-bottom: 0.5rem;
    }
    .form-label {
        font-size: 0.9rem;
        font-weight: 500;
        color: var(--foreground);
    }
    .form-item.has-error .form-label {
        color: var(--destructive);
    }
    .form-input {
        width: 100%;
        padding: 0.6rem 0.8rem;
        border-radius: 8px;
        border: 1px solid var(--border);
        background: var(--background);
        color: var(--foreground);
        font: inherit;
        box-sizing: border-box;
    }
    .form-input:focus {
        outline: 2px solid var(--primary);
        outline-offset: 1px;
    }
    .form-textarea {
        min-height: 70px;
        resize: vertical;
    }
    .form-message {
        margin: 0;
        font-size: 0.8rem;
        color: var(--destructive);
    }
    .form-checkbox {
        display: flex;
        align-items: flex-start;
        gap: 0.7rem;
        font-size: 0.9rem;
        margin: 0.6rem 0;
        cursor: pointer;
    }
    .form-note {
        font-size: 0.8rem;
        color: var(--muted-foreground);
    }
    .form-actions {
        display: flex;
        justify-content: flex-end;
        gap: 0.75rem;
        padding-top: 1rem;
    }
    .btn {
        padding: 0.65rem 1.3rem;
        border-radius: 8px;
        font-weight: 500;
        border: 1px solid transparent;
        cursor: pointer;
        transition: all 0.2s ease;
    }
    .btn:disabled {
        opacity: 0.6;
        cursor: not-allowed;
    }
    .btn-primary {
        background: var(--primary);
        color: var(--primary-foreground);
    }
    .btn-primary:hover:not(:disabled) {
        background: var(--primary-dark);
    }
    .btn-outline {
        background: transparent;
        border-color: var(--border);
        color: var(--foreground);
    }
"#;
