//! Notepad desktop app: plain-text editing with menu-driven file, edit, and
//! view actions over the host service boundary.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod edit;

use leptos::ev::MouseEvent;
use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::*;
use shell_app_contract::{AppModule, AppMountContext};
use shell_ui::{
    AppShell, Button, ButtonVariant, MenuBar, MenuItem, MenuSeparator, MenuSurface, StatusBar,
    StatusBarItem,
};

pub use edit::{caret_position, paste_over, remove_selection, selected_text, SelectionSpan};

const DEFAULT_DOCUMENT_TITLE: &str = "Untitled.txt";
const MIN_ZOOM: f64 = 0.1;

/// Returns the mountable notepad module for the runtime app registry.
pub fn module() -> AppModule {
    AppModule::new(mount)
}

fn mount(context: AppMountContext) -> View {
    view! { <NotepadApp context=context /> }.into_view()
}

#[component]
fn NotepadMenu(
    label: &'static str,
    menu_id: &'static str,
    open_menu: RwSignal<Option<&'static str>>,
    children: Children,
) -> impl IntoView {
    let is_open = create_memo(move |_| open_menu.get() == Some(menu_id));

    view! {
        <div class="notepad-menu" data-ui-slot="menu-anchor" on:mousedown=move |ev| ev.stop_propagation()>
            <Button
                variant=ButtonVariant::Quiet
                aria_expanded=Signal::from(is_open)
                selected=Signal::from(is_open)
                on_click=Callback::new(move |_| {
                    open_menu.update(|open| {
                        *open = if *open == Some(menu_id) {
                            None
                        } else {
                            Some(menu_id)
                        };
                    });
                })
            >
                {label}
            </Button>
            <MenuSurface open=Signal::from(is_open) id=menu_id>
                {children()}
            </MenuSurface>
        </div>
    }
}

#[component]
fn NotepadMenuItem(
    open_menu: RwSignal<Option<&'static str>>,
    #[prop(optional)] action: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <MenuItem on_click=Callback::new(move |_ev: MouseEvent| {
            open_menu.set(None);
            if let Some(action) = action.as_ref() {
                action.call(());
            }
        })>
            {children()}
        </MenuItem>
    }
}

#[component]
/// Notepad window contents.
pub fn NotepadApp(
    /// Runtime mount context for this window instance.
    context: AppMountContext,
) -> impl IntoView {
    let AppMountContext { services, host, .. } = context;

    let content = create_rw_signal(String::from("Made with Leptos!"));
    let history = create_rw_signal(Vec::<String>::new());
    let doc_title = create_rw_signal(DEFAULT_DOCUMENT_TITLE.to_string());
    let show_status_bar = create_rw_signal(true);
    let zoom = create_rw_signal(1.0_f64);
    let cursor = create_rw_signal((1_usize, 1_usize));
    let selection = create_rw_signal(None::<SelectionSpan>);
    let open_menu = create_rw_signal(None::<&'static str>);

    let textarea_ref = create_node_ref::<html::Textarea>();

    create_effect(move |_| {
        host.set_title(format!("{} - Notepad", doc_title.get()));
    });

    // Menu popups dismiss on outside-click and Escape; both listeners exist
    // only while a menu is open.
    let dismiss_handles: StoredValue<Vec<WindowListenerHandle>> = store_value(Vec::new());
    let release_dismiss_listeners = move || {
        dismiss_handles.update_value(|handles| {
            for handle in handles.drain(..) {
                handle.remove();
            }
        });
    };
    let any_menu_open = create_memo(move |_| open_menu.get().is_some());
    create_effect(move |_| {
        let is_open = any_menu_open.get();
        release_dismiss_listeners();
        if !is_open {
            return;
        }
        let outside_click = window_event_listener(ev::mousedown, move |_| open_menu.set(None));
        let escape = window_event_listener(ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                open_menu.set(None);
            }
        });
        dismiss_handles.update_value(|handles| {
            handles.extend([outside_click, escape]);
        });
    });
    on_cleanup(release_dismiss_listeners);

    let record_edit = move |next: String| {
        history.update(|stack| stack.push(content.get_untracked()));
        content.set(next);
    };

    let read_selection = move || {
        let Some(textarea) = textarea_ref.get_untracked() else {
            return;
        };
        let start = textarea.selection_start().ok().flatten();
        let end = textarea.selection_end().ok().flatten();
        selection.set(match (start, end) {
            (Some(start), Some(end)) => Some(SelectionSpan {
                start: start as usize,
                end: end as usize,
            }),
            _ => None,
        });
    };

    let update_caret = move || {
        let Some(textarea) = textarea_ref.get_untracked() else {
            return;
        };
        if let Ok(Some(start)) = textarea.selection_start() {
            let before: String = textarea.value().chars().take(start as usize).collect();
            cursor.set(caret_position(&before));
        }
    };

    let undo = Callback::new(move |_: ()| {
        let mut restored = None;
        history.update(|stack| restored = stack.pop());
        if let Some(previous) = restored {
            content.set(previous);
        }
    });

    let copy = {
        let clipboard = services.clipboard.clone();
        Callback::new(move |_: ()| {
            let Some(span) = selection.get_untracked() else {
                return;
            };
            let text = selected_text(&content.get_untracked(), span);
            let clipboard = clipboard.clone();
            spawn_local(async move {
                if let Err(err) = clipboard.write_text(&text).await {
                    logging::warn!("notepad copy failed: {err}");
                }
            });
        })
    };

    let cut = {
        let clipboard = services.clipboard.clone();
        Callback::new(move |_: ()| {
            let Some(span) = selection.get_untracked() else {
                return;
            };
            let current = content.get_untracked();
            let text = selected_text(&current, span);
            record_edit(remove_selection(&current, span));
            let clipboard = clipboard.clone();
            spawn_local(async move {
                if let Err(err) = clipboard.write_text(&text).await {
                    logging::warn!("notepad cut failed: {err}");
                }
            });
        })
    };

    let delete = Callback::new(move |_: ()| {
        let Some(span) = selection.get_untracked() else {
            return;
        };
        record_edit(remove_selection(&content.get_untracked(), span));
    });

    let paste = {
        let clipboard = services.clipboard.clone();
        Callback::new(move |_: ()| {
            let Some(span) = selection.get_untracked() else {
                return;
            };
            let clipboard = clipboard.clone();
            spawn_local(async move {
                match clipboard.read_text().await {
                    Ok(clip) if !clip.is_empty() => {
                        record_edit(paste_over(&content.get_untracked(), span, &clip));
                    }
                    Ok(_) => {}
                    Err(err) => logging::warn!("notepad paste failed: {err}"),
                }
            });
        })
    };

    let new_document = Callback::new(move |_: ()| {
        content.set(String::new());
        history.set(Vec::new());
        doc_title.set(DEFAULT_DOCUMENT_TITLE.to_string());
    });

    let new_window = Callback::new(move |_: ()| host.open_new_window());

    let open_document = {
        let files = services.text_files.clone();
        Callback::new(move |_: ()| {
            let files = files.clone();
            spawn_local(async move {
                match files.open_text().await {
                    Ok(Some(document)) => {
                        doc_title.set(document.name);
                        content.set(document.contents);
                        history.set(Vec::new());
                    }
                    Ok(None) => {}
                    Err(err) => logging::warn!("notepad open failed: {err}"),
                }
            });
        })
    };

    let save_document = {
        let files = services.text_files.clone();
        Callback::new(move |_: ()| {
            let files = files.clone();
            let name = doc_title.get_untracked();
            let contents = content.get_untracked();
            spawn_local(async move {
                if let Err(err) = files.save_text(&name, &contents).await {
                    logging::warn!("notepad save failed: {err}");
                }
            });
        })
    };

    let exit = Callback::new(move |_: ()| host.close_window());

    let open_project_page = {
        let external_urls = services.external_urls.clone();
        Callback::new(move |_: ()| {
            let external_urls = external_urls.clone();
            spawn_local(async move {
                if let Err(err) = external_urls
                    .open_url("https://github.com/webtop-shell/webtop")
                    .await
                {
                    logging::warn!("notepad help link failed: {err}");
                }
            });
        })
    };

    let zoom_in = Callback::new(move |_: ()| zoom.update(|z| *z += 0.1));
    let zoom_out = Callback::new(move |_: ()| zoom.update(|z| *z = (*z - 0.1).max(MIN_ZOOM)));
    let zoom_reset = Callback::new(move |_: ()| zoom.set(1.0));
    let toggle_status_bar = Callback::new(move |_: ()| show_status_bar.update(|shown| *shown = !*shown));

    view! {
        <AppShell layout_class="app-notepad">
            <MenuBar aria_label="Notepad menu">
                <NotepadMenu label="Files" menu_id="notepad-menu-files" open_menu=open_menu>
                    <NotepadMenuItem open_menu=open_menu action=new_document>"New"</NotepadMenuItem>
                    <NotepadMenuItem open_menu=open_menu action=new_window>"New window"</NotepadMenuItem>
                    <NotepadMenuItem open_menu=open_menu action=open_document>"Open..."</NotepadMenuItem>
                    <NotepadMenuItem open_menu=open_menu action=save_document>"Save"</NotepadMenuItem>
                    <NotepadMenuItem open_menu=open_menu action=save_document>"Save as..."</NotepadMenuItem>
                    <MenuSeparator />
                    <NotepadMenuItem open_menu=open_menu action=exit>"Exit"</NotepadMenuItem>
                </NotepadMenu>
                <NotepadMenu label="Edit" menu_id="notepad-menu-edit" open_menu=open_menu>
                    <NotepadMenuItem open_menu=open_menu action=undo>"Undo"</NotepadMenuItem>
                    <MenuSeparator />
                    <NotepadMenuItem open_menu=open_menu action=cut>"Cut"</NotepadMenuItem>
                    <NotepadMenuItem open_menu=open_menu action=copy>"Copy"</NotepadMenuItem>
                    <NotepadMenuItem open_menu=open_menu action=paste>"Paste"</NotepadMenuItem>
                    <NotepadMenuItem open_menu=open_menu action=delete>"Delete"</NotepadMenuItem>
                    <MenuSeparator />
                    <NotepadMenuItem open_menu=open_menu>"Find"</NotepadMenuItem>
                    <MenuSeparator />
                    <NotepadMenuItem open_menu=open_menu>"Select all"</NotepadMenuItem>
                </NotepadMenu>
                <NotepadMenu label="Show" menu_id="notepad-menu-show" open_menu=open_menu>
                    <NotepadMenuItem open_menu=open_menu action=zoom_in>"Increase zoom"</NotepadMenuItem>
                    <NotepadMenuItem open_menu=open_menu action=zoom_out>"Reduce zoom"</NotepadMenuItem>
                    <NotepadMenuItem open_menu=open_menu action=zoom_reset>"Default zoom"</NotepadMenuItem>
                    <MenuSeparator />
                    <NotepadMenuItem open_menu=open_menu action=toggle_status_bar>
                        {move || if show_status_bar.get() { "\u{2714} Status bar" } else { "Status bar" }}
                    </NotepadMenuItem>
                </NotepadMenu>
                <NotepadMenu label="Help" menu_id="notepad-menu-help" open_menu=open_menu>
                    <NotepadMenuItem open_menu=open_menu action=open_project_page>"Project page"</NotepadMenuItem>
                </NotepadMenu>
            </MenuBar>

            <textarea
                class="notepad-page"
                data-ui-primitive="true"
                data-ui-kind="text-area"
                node_ref=textarea_ref
                style=move || format!("font-size:{:.2}rem;", zoom.get())
                prop:value=move || content.get()
                on:input=move |ev| record_edit(event_target_value(&ev))
                on:click=move |_| update_caret()
                on:keyup=move |_| update_caret()
                on:select=move |_| read_selection()
                spellcheck="false"
                autocomplete="off"
                aria-label="Notepad text editor"
            ></textarea>

            <Show when=move || show_status_bar.get() fallback=|| ()>
                <StatusBar>
                    <StatusBarItem>
                        {move || {
                            let (row, col) = cursor.get();
                            format!("Ln {row}, Col {col}")
                        }}
                    </StatusBarItem>
                    <StatusBarItem>{move || format!("{}%", (zoom.get() * 100.0).round())}</StatusBarItem>
                    <StatusBarItem>"Webtop (CRLF)"</StatusBarItem>
                    <StatusBarItem>"UTF-8"</StatusBarItem>
                </StatusBar>
            </Show>
        </AppShell>
    }
}
