use yew::prelude::*;

use crate::search::Page;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub page: Page,
    pub on_change: Callback<usize>,
}

/// Page numbers shown around the current one, with gaps as `None`.
pub fn page_window(current: usize, total: usize) -> Vec<Option<usize>> {
    let mut out = Vec::new();
    let mut last = 0;
    for n in 1..=total {
        if n == 1 || n == total || (n + 2 >= current && n <= current + 2) {
            if last != 0 && n > last + 1 {
                out.push(None);
            }
            out.push(Some(n));
            last = n;
        }
    }
    out
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    let page = props.page;
    if page.total_pages() <= 1 {
        return html! {};
    }

    let go = |target: usize| {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(target))
    };

    html! {
        <div class="pagination">
            <button class="btn btn-outline" disabled={!page.has_prev()} onclick={go(page.current.saturating_sub(1))}>
                {"Previous"}
            </button>
            {
                page_window(page.current, page.total_pages()).into_iter().map(|slot| match slot {
                    Some(n) => html! {
                        <button
                            class={classes!("page-number", (n == page.current).then(|| "active"))}
                            onclick={go(n)}
                        >
                            {n}
                        </button>
                    },
                    None => html! { <span class="page-gap">{"…"}</span> },
                }).collect::<Html>()
            }
            <button class="btn btn-outline" disabled={!page.has_next()} onclick={go(page.current + 1)}>
                {"Next"}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_keeps_ends_and_neighbours() {
        assert_eq!(page_window(1, 3), vec![Some(1), Some(2), Some(3)]);
        assert_eq!(
            page_window(10, 25),
            vec![Some(1), None, Some(8), Some(9), Some(10), Some(11), Some(12), None, Some(25)]
        );
        assert_eq!(page_window(1, 0), Vec::<Option<usize>>::new());
    }
}
