//! To-Do List Component

use leptos::prelude::*;

use deck_core::BoardAction;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TaskPanel() -> impl IntoView {
    let ctx = use_app_context();
    let board = use_app_store().board();

    view! {
        <div class="todo">
            <h2>"To-Do List"</h2>
            <input
                type="text"
                placeholder="Add a task"
                prop:value=move || board.read().tasks().draft().to_string()
                on:input=move |ev| {
                    ctx.dispatch(BoardAction::EditTaskDraft(event_target_value(&ev)))
                }
            />
            <button on:click=move |_| ctx.dispatch(BoardAction::AddTask)>"Add Task"</button>
            <ul>
                // Keyed by position: tasks have no other identity
                {move || board.read().tasks().items().iter().enumerate().map(|(index, task)| {
                    view! {
                        <li class=if task.completed { "task completed" } else { "task" }>
                            {task.display_label()}
                            <button on:click=move |_| {
                                ctx.dispatch(BoardAction::CompleteTask(index))
                            }>
                                "Complete"
                            </button>
                            <button on:click=move |_| ctx.dispatch(BoardAction::RemoveTask(index))>
                                "Remove"
                            </button>
                        </li>
                    }
                }).collect_view()}
            </ul>
            <p>{move || board.read().summary().tasks_line()}</p>
        </div>
    }
}
