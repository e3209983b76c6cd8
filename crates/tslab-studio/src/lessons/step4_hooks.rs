use super::{PlaygroundSpec, Section};

pub const SECTIONS: &[Section] = &[
    Section::Text(
        "Hooks compose state and effects out of plain functions. The typing \
         patterns are the same ones you already know: generics for the state \
         cell, interfaces for the returned bundle.",
    ),
    Section::Heading("1. useState with a generic"),
    Section::Code(
        r#"const [todos, setTodos] = useState<Todo[]>([]);
const [filter, setFilter] = useState<"all" | "open" | "done">("all");"#,
    ),
    Section::Heading("2. useReducer with a discriminated union"),
    Section::Code(
        r#"type CounterAction =
  | { type: "increment"; by: number }
  | { type: "reset" };

function reducer(state: number, action: CounterAction): number {
  switch (action.type) {
    case "increment":
      return state + action.by;
    case "reset":
      return 0;
  }
}"#,
    ),
    Section::Text(
        "The `type` member discriminates the union: inside each case the \
         compiler knows exactly which payload fields exist.",
    ),
    Section::Playground(PlaygroundSpec {
        title: "Discriminated unions",
        default_code: r#"type CounterAction =
  | { type: "increment"; by: number }
  | { type: "reset" };

function reducer(state: number, action: CounterAction): number {
  switch (action.type) {
    case "increment":
      return state + action.by;
    case "reset":
      return 0;
  }
}

let state = 0;
state = reducer(state, { type: "increment", by: 5 });
state = reducer(state, { type: "increment", by: 3 });
console.log("after increments:", state);
state = reducer(state, { type: "reset" });
console.log("after reset:", state);"#,
        solution: None,
        editor_rows: 18,
    }),
    Section::Heading("3. Custom hooks return typed bundles"),
    Section::Code(
        r#"interface UseToggle {
  on: boolean;
  toggle: () => void;
}

function useToggle(initial = false): UseToggle {
  const [on, setOn] = useState<boolean>(initial);
  return { on, toggle: () => setOn((v) => !v) };
}"#,
    ),
    Section::Heading("Exercise"),
    Section::Playground(PlaygroundSpec {
        title: "Exercises: reducer actions",
        default_code: r#"// TODO: extend CartAction with a "remove" variant carrying an id,
// handle it in the reducer, and print the resulting cart

type Item = { id: number; name: string };

type CartAction = { type: "add"; item: Item };

function reducer(items: Item[], action: CartAction): Item[] {
  switch (action.type) {
    case "add":
      return [...items, action.item];
  }
}

let cart: Item[] = [];
cart = reducer(cart, { type: "add", item: { id: 1, name: "keyboard" } });
console.log(cart);"#,
        solution: Some(
            r#"type Item = { id: number; name: string };

type CartAction =
  | { type: "add"; item: Item }
  | { type: "remove"; id: number };

function reducer(items: Item[], action: CartAction): Item[] {
  switch (action.type) {
    case "add":
      return [...items, action.item];
    case "remove":
      return items.filter((item) => item.id !== action.id);
  }
}

let cart: Item[] = [];
cart = reducer(cart, { type: "add", item: { id: 1, name: "keyboard" } });
cart = reducer(cart, { type: "add", item: { id: 2, name: "mouse" } });
cart = reducer(cart, { type: "remove", id: 1 });
console.log(cart);"#,
        ),
        editor_rows: 16,
    }),
];
