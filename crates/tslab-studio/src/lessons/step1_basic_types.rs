use super::{PlaygroundSpec, Section};

pub const SECTIONS: &[Section] = &[
    Section::Text(
        "TypeScript adds a static type system on top of JavaScript. In this \
         step you try out the primitive types by editing and running real \
         snippets.",
    ),
    Section::Heading("1. Primitive types"),
    Section::Text(
        "The three workhorses are string, number and boolean. Annotations \
         come after the variable name.",
    ),
    Section::Code(
        r#"let username: string = "Hong Gildong";
let age: number = 25;
let isActive: boolean = true;"#,
    ),
    Section::Playground(PlaygroundSpec {
        title: "Primitive types",
        default_code: r#"let x: number = 5;
console.log(x);"#,
        solution: None,
        editor_rows: 6,
    }),
    Section::Heading("2. Arrays"),
    Section::Text(
        "Arrays can be written as `type[]` or `Array<type>`. Both mean the \
         same thing; the bracket form is more common.",
    ),
    Section::Code(
        r#"let numbers: number[] = [1, 2, 3, 4, 5];
let names: string[] = ["Kim", "Lee", "Park"];
let scores: Array<number> = [90, 85, 100];"#,
    ),
    Section::Playground(PlaygroundSpec {
        title: "Arrays",
        default_code: r#"let numbers: number[] = [1, 2, 3, 4, 5];
let total = numbers.reduce((acc, n) => acc + n, 0);
console.log("sum:", total);"#,
        solution: None,
        editor_rows: 7,
    }),
    Section::Heading("3. Objects and functions"),
    Section::Text(
        "Object shapes can be described inline. Function parameters and \
         return values take annotations too; `void` marks a function that \
         returns nothing.",
    ),
    Section::Code(
        r#"let user: { name: string; age: number } = {
  name: "Kim Cheolsu",
  age: 30,
};

function add(a: number, b: number): number {
  return a + b;
}

function printMessage(message: string): void {
  console.log(message);
}

const multiply = (x: number, y: number): number => x * y;"#,
    ),
    Section::Heading("4. any — avoid when you can"),
    Section::Text(
        "A value typed `any` opts out of checking entirely. It is an escape \
         hatch, not a default.",
    ),
    Section::Code(
        r#"let anything: any = "a string";
anything = 123;   // no error
anything = true;  // no error"#,
    ),
    Section::Heading("Exercises"),
    Section::Text(
        "Complete the three TODOs. Run your code to check it, and compare \
         with the solution when you are done.",
    ),
    Section::Playground(PlaygroundSpec {
        title: "Exercises: basic types",
        default_code: r#"// TODO 1: finish greet so it returns "Hello, <name>!"
function greet(name: string): string {
  // write your code here
  return "";
}

// TODO 2: give the student object name, grade and isPassed fields
let student: { name: string; grade: number; isPassed: boolean } = {
  name: "",
  grade: 0,
  isPassed: false,
};

// TODO 3: compute the average of a number array
function getAverage(nums: number[]): number {
  // write your code here
  return 0;
}

console.log(greet("Gildong"));
console.log(getAverage([80, 90, 100]));"#,
        solution: Some(
            r#"function greet(name: string): string {
  return `Hello, ${name}!`;
}

let student: { name: string; grade: number; isPassed: boolean } = {
  name: "Kim Cheolsu",
  grade: 85,
  isPassed: true,
};

function getAverage(nums: number[]): number {
  if (nums.length === 0) return 0;
  const sum = nums.reduce((acc, num) => acc + num, 0);
  return sum / nums.length;
}

console.log(greet("Gildong"));
console.log(getAverage([80, 90, 100]));"#,
        ),
        editor_rows: 16,
    }),
];
