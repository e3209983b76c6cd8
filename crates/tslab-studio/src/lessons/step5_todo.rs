use super::{PlaygroundSpec, Section};

pub const SECTIONS: &[Section] = &[
    Section::Text(
        "First mini-project: the data layer of a todo app. Everything from \
         the earlier steps shows up — interfaces, unions, generics in array \
         methods — in one small, complete domain.",
    ),
    Section::Heading("1. The domain model"),
    Section::Code(
        r#"interface Todo {
  id: number;
  title: string;
  done: boolean;
  createdAt: number;
}

type TodoFilter = "all" | "open" | "done";"#,
    ),
    Section::Heading("2. Operations on the list"),
    Section::Playground(PlaygroundSpec {
        title: "Todo operations",
        default_code: r#"interface Todo {
  id: number;
  title: string;
  done: boolean;
}

let nextId = 1;

function addTodo(todos: Todo[], title: string): Todo[] {
  return [...todos, { id: nextId++, title, done: false }];
}

function toggleTodo(todos: Todo[], id: number): Todo[] {
  return todos.map((todo) =>
    todo.id === id ? { ...todo, done: !todo.done } : todo
  );
}

let todos: Todo[] = [];
todos = addTodo(todos, "learn interfaces");
todos = addTodo(todos, "build a todo app");
todos = toggleTodo(todos, 1);

for (const todo of todos) {
  console.log(`${todo.done ? "[x]" : "[ ]"} ${todo.title}`);
}"#,
        solution: None,
        editor_rows: 20,
    }),
    Section::Heading("3. Filtering with a union"),
    Section::Code(
        r#"function filterTodos(todos: Todo[], filter: TodoFilter): Todo[] {
  switch (filter) {
    case "all":
      return todos;
    case "open":
      return todos.filter((t) => !t.done);
    case "done":
      return todos.filter((t) => t.done);
  }
}"#,
    ),
    Section::Heading("Exercise: statistics"),
    Section::Playground(PlaygroundSpec {
        title: "Exercises: todo stats",
        default_code: r#"interface Todo {
  id: number;
  title: string;
  done: boolean;
}

// TODO: implement stats so it reports the open and done counts
function stats(todos: Todo[]): { open: number; done: number } {
  // write your code here
  return { open: 0, done: 0 };
}

const todos: Todo[] = [
  { id: 1, title: "a", done: true },
  { id: 2, title: "b", done: false },
  { id: 3, title: "c", done: true },
];

console.log(stats(todos));"#,
        solution: Some(
            r#"interface Todo {
  id: number;
  title: string;
  done: boolean;
}

function stats(todos: Todo[]): { open: number; done: number } {
  const done = todos.filter((t) => t.done).length;
  return { open: todos.length - done, done };
}

const todos: Todo[] = [
  { id: 1, title: "a", done: true },
  { id: 2, title: "b", done: false },
  { id: 3, title: "c", done: true },
];

console.log(stats(todos));"#,
        ),
        editor_rows: 18,
    }),
];
