use super::{PlaygroundSpec, Section};

pub const SECTIONS: &[Section] = &[
    Section::Text(
        "Generics and the built-in utility types are where TypeScript starts \
         paying for itself: one definition, many shapes, still checked.",
    ),
    Section::Heading("1. Generic functions"),
    Section::Code(
        r#"function firstElement<T>(arr: T[]): T | undefined {
  return arr[0];
}

const n = firstElement([1, 2, 3]);        // number | undefined
const s = firstElement(["a", "b", "c"]);  // string | undefined"#,
    ),
    Section::Playground(PlaygroundSpec {
        title: "Generics",
        default_code: r#"function wrap<T>(value: T): { value: T } {
  return { value };
}

const wrappedNumber = wrap(42);
const wrappedText = wrap("hello");

console.log(wrappedNumber.value);
console.log(wrappedText.value.toUpperCase());"#,
        solution: None,
        editor_rows: 11,
    }),
    Section::Heading("2. Generic constraints"),
    Section::Code(
        r#"interface HasLength {
  length: number;
}

function longest<T extends HasLength>(a: T, b: T): T {
  return a.length >= b.length ? a : b;
}

longest("apple", "fig");    // ok
longest([1, 2], [1, 2, 3]); // ok"#,
    ),
    Section::Heading("3. Utility types"),
    Section::Text(
        "Partial makes every member optional, Pick selects a few, Omit drops \
         a few, Record builds a keyed map. They are ordinary generic aliases \
         shipped with the standard library.",
    ),
    Section::Playground(PlaygroundSpec {
        title: "Utility types",
        default_code: r#"interface Todo {
  id: number;
  title: string;
  done: boolean;
}

type TodoDraft = Partial<Todo>;
type TodoPreview = Pick<Todo, "id" | "title">;

const draft: TodoDraft = { title: "write the lesson" };
const preview: TodoPreview = { id: 1, title: "write the lesson" };

console.log(draft);
console.log(preview);"#,
        solution: None,
        editor_rows: 14,
    }),
    Section::Heading("Exercises"),
    Section::Playground(PlaygroundSpec {
        title: "Exercises: advanced types",
        default_code: r#"// TODO 1: write lastElement<T> returning the last element or undefined

// TODO 2: given interface User { id: number; name: string; email: string },
// build a PublicUser type without the email using Omit

// TODO 3: build a Record<string, number> of page view counts and
// print the total
"#,
        solution: Some(
            r#"function lastElement<T>(arr: T[]): T | undefined {
  return arr[arr.length - 1];
}

interface User {
  id: number;
  name: string;
  email: string;
}

type PublicUser = Omit<User, "email">;

const visible: PublicUser = { id: 1, name: "Hong Gildong" };

const views: Record<string, number> = {
  home: 120,
  lessons: 80,
  ebook: 15,
};

let total = 0;
for (const page in views) {
  total += views[page];
}

console.log(lastElement([1, 2, 3]));
console.log(visible);
console.log("total views:", total);"#,
        ),
        editor_rows: 12,
    }),
];
