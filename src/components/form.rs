use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

pub fn on_input(f: impl Fn(String) + 'static) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        f(input.value());
    })
}

pub fn on_textarea(f: impl Fn(String) + 'static) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        f(input.value());
    })
}

pub fn on_select(f: impl Fn(String) + 'static) -> Callback<Event> {
    Callback::from(move |e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        f(select.value());
    })
}

/// Binds a text input straight to a string state.
pub fn bind(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    on_input(move |v| state.set(v))
}

/// Updates one field of a form struct held in state.
pub fn bind_field<T, F>(state: &UseStateHandle<T>, set: F) -> Callback<InputEvent>
where
    T: Clone + 'static,
    F: Fn(&mut T, String) + 'static,
{
    let state = state.clone();
    on_input(move |v| {
        let mut next = (*state).clone();
        set(&mut next, v);
        state.set(next);
    })
}

pub fn bind_textarea_field<T, F>(state: &UseStateHandle<T>, set: F) -> Callback<InputEvent>
where
    T: Clone + 'static,
    F: Fn(&mut T, String) + 'static,
{
    let state = state.clone();
    on_textarea(move |v| {
        let mut next = (*state).clone();
        set(&mut next, v);
        state.set(next);
    })
}

pub fn bind_select_field<T, F>(state: &UseStateHandle<T>, set: F) -> Callback<Event>
where
    T: Clone + 'static,
    F: Fn(&mut T, String) + 'static,
{
    let state = state.clone();
    on_select(move |v| {
        let mut next = (*state).clone();
        set(&mut next, v);
        state.set(next);
    })
}

/// `<option>` list with a leading "any" entry.
pub fn options(placeholder: &str, values: &[&str], selected: &str) -> Html {
    html! {
        <>
            <option value="" selected={selected.is_empty()}>{placeholder}</option>
            {
                values.iter().map(|v| html! {
                    <option value={v.to_string()} selected={*v == selected}>{*v}</option>
                }).collect::<Html>()
            }
        </>
    }
}
