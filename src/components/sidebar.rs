use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::config::NavConfig;
use crate::dom::{Page, Viewport};
use crate::hooks::use_active_section;

#[derive(Clone, PartialEq)]
pub struct NavItem {
    /// Id of the section this icon scrolls to
    pub id: String,
    pub label: String,
    pub icon: Option<IconId>,
}

impl NavItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self { id: id.into(), label: label.into(), icon: None }
    }

    pub fn with_icon(mut self, icon: IconId) -> Self {
        self.icon = Some(icon);
        self
    }
}

#[derive(Properties, PartialEq)]
pub struct NavSidebarProps {
    pub items: Vec<NavItem>,
    #[prop_or_default]
    pub config: NavConfig,
    /// Initial visibility
    #[prop_or(false)]
    pub open: bool,
    /// Called with the section id after a nav icon is clicked
    #[prop_or_default]
    pub on_navigate: Option<Callback<String>>,
}

#[function_component(NavSidebar)]
pub fn nav_sidebar(props: &NavSidebarProps) -> Html {
    let open = use_state(|| props.open);
    let active = use_active_section(props.config.clone());
    let active_class = props.config.active_class.clone();

    let on_toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    let nav = |item: &NavItem| {
        let id = item.id.clone();
        let active = active.clone();
        let smooth = props.config.smooth_scroll;
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            active.set(Some(id.clone()));
            if let Ok(page) = Page::current() {
                page.scroll_to_section(&id, smooth);
            }
            if let Some(cb) = &on_navigate {
                cb.emit(id.clone());
            }
        })
    };

    html! {
        <aside class={classes!("sidebar", (*open).then(|| active_class.clone()))}>
            <button class="sidebar-toggle" title="Toggle navigation" type="button" onclick={on_toggle}>
                <Icon icon_id={if *open { IconId::LucideX } else { IconId::LucideChevronRight }} width={"20"} height={"20"} />
            </button>
            {
                for props.items.iter().map(|item| {
                    let is_active = active.as_deref() == Some(item.id.as_str());
                    html! {
                        <a
                            class={classes!("nav-icon", is_active.then(|| active_class.clone()))}
                            href={format!("#{}", item.id)}
                            title={item.label.clone()}
                            onclick={nav(item)}
                        >
                            <Icon icon_id={item.icon.clone().unwrap_or(IconId::LucideHome)} width={"28"} height={"28"} />
                        </a>
                    }
                })
            }
        </aside>
    }
}
