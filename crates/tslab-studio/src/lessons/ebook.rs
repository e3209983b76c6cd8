/// Content pages of the e-book viewer, between the cover and back cover.
pub struct EbookPage {
    pub title: &'static str,
    pub body: &'static str,
}

pub const EBOOK_PAGES: &[EbookPage] = &[
    EbookPage {
        title: "Where TypeScript began",
        body: "TypeScript is a programming language that adds a type system \
               on top of JavaScript.\n\nDeveloped and maintained by \
               Microsoft, it is a good fit for large applications.\n\nKey \
               traits:\n• Static type checking\n• Better IDE support\n• \
               Modern JavaScript features\n• Gradual adoption",
    },
    EbookPage {
        title: "UI frameworks and TypeScript",
        body: "Using TypeScript with a component framework makes component \
               contracts checkable.\n\nTyping props, state and event \
               handlers prevents whole classes of runtime errors before the \
               page ever loads.\n\nBenefits:\n• Prop autocompletion\n• \
               Typos caught at compile time\n• Safer refactoring\n• A \
               better developer experience",
    },
    EbookPage {
        title: "Hands-on projects",
        body: "Now put the pieces together in real projects!\n\nThe todo \
               app and the API integration exercises grow your skills on \
               working code.\n\nStudy tips:\n• Start with small projects\n• \
               Read error messages carefully\n• Keep type definitions \
               precise\n• Practice by actually writing code\n\nGood luck! 🚀",
    },
];
