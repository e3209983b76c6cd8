use super::{PlaygroundSpec, Section};

pub const SECTIONS: &[Section] = &[
    Section::Text(
        "An interface names an object shape. Optional members, readonly \
         members and extension let one interface grow out of another.",
    ),
    Section::Heading("1. Declaring an interface"),
    Section::Code(
        r#"interface User {
  name: string;
  age: number;
  email?: string;        // optional
  readonly id: number;   // cannot be reassigned
}"#,
    ),
    Section::Playground(PlaygroundSpec {
        title: "Interface basics",
        default_code: r#"interface User {
  name: string;
  age: number;
  email?: string;
}

const user: User = {
  name: "Lee Younghee",
  age: 28,
};

console.log(user.name, user.age);
console.log("email:", user.email ?? "(none)");"#,
        solution: None,
        editor_rows: 12,
    }),
    Section::Heading("2. Extending interfaces"),
    Section::Text(
        "`extends` builds a wider shape from a narrower one. A value of the \
         extended type must satisfy both.",
    ),
    Section::Code(
        r#"interface Animal {
  name: string;
}

interface Dog extends Animal {
  breed: string;
}

const dog: Dog = { name: "Badugi", breed: "Jindo" };"#,
    ),
    Section::Heading("3. Interfaces for functions"),
    Section::Code(
        r#"interface Calculator {
  (a: number, b: number): number;
}

const add: Calculator = (a, b) => a + b;"#,
    ),
    Section::Heading("Exercises"),
    Section::Playground(PlaygroundSpec {
        title: "Exercises: interface",
        default_code: r#"// TODO 1: declare a Book interface with a readonly isbn (string),
// title (string), author (string) and an optional publishedYear (number)

// TODO 2: create a Book value named myBook and print its title

// TODO 3: declare Student { studentId, name, major } and
// GraduateStudent extending it with advisor and researchTopic
"#,
        solution: Some(
            r#"interface Book {
  readonly isbn: string;
  title: string;
  author: string;
  publishedYear?: number;
}

const myBook: Book = {
  isbn: "978-1234567890",
  title: "TypeScript Primer",
  author: "Hong Gildong",
  publishedYear: 2024,
};

console.log(myBook.title);

interface Student {
  studentId: string;
  name: string;
  major: string;
}

interface GraduateStudent extends Student {
  advisor: string;
  researchTopic: string;
}

const grad: GraduateStudent = {
  studentId: "G-2024-01",
  name: "Kim Yuna",
  major: "Computer Science",
  advisor: "Prof. Park",
  researchTopic: "Type systems",
};

console.log(grad.name, "studies", grad.researchTopic);"#,
        ),
        editor_rows: 14,
    }),
];
