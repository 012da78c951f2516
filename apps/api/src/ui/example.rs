//! Sample inputs behind the "Paste Example Data" link.

pub const EXAMPLE_JOB_DESCRIPTION: &str = "\
Job Title: Senior Frontend Engineer (React)
Location: San Francisco, CA (Remote Friendly)
Salary: $150,000 - $190,000

Company: InnovateTech

We are seeking a seasoned Senior Frontend Engineer with deep expertise in React and the modern JavaScript ecosystem to build beautiful, high-performance user interfaces.

Responsibilities:
- Develop and maintain web applications using React.js and TypeScript.
- Collaborate with product managers and designers to translate wireframes into high-quality code.
- Optimize components for maximum performance across a vast array of web-capable devices and browsers.
- Build reusable components and front-end libraries for future use (Storybook experience is a plus).
- Work with backend developers to integrate RESTful APIs.
- Write clean, maintainable, and well-tested code using Jest and React Testing Library.

Must-Have Skills:
- 5+ years of professional software development experience.
- Expert in React, Redux, and modern JavaScript (ES6+).
- Strong proficiency in TypeScript.
- Experience with CSS-in-JS or utility-first CSS frameworks like Tailwind CSS.
- Proficient with version control (Git).

Nice-to-Have:
- Experience with Next.js or other SSR frameworks.
- Knowledge of GraphQL.
- CI/CD pipeline experience (e.g., Jenkins, GitHub Actions).
- Contributions to open-source projects.";

pub const EXAMPLE_RESUME: &str = "\
John Doe
Senior Frontend Developer

Summary:
A results-oriented Senior Frontend Developer with 7 years of experience specializing in creating dynamic and responsive user interfaces with React. Passionate about clean code and performance optimization.

Experience:
Lead Frontend Developer | TechSolutions Inc. | 2018-Present
- Led the development of a new customer-facing dashboard using React and TypeScript, resulting in a 20% increase in user engagement.
- Implemented a component library that reduced code duplication by 40%.
- Integrated various REST APIs for real-time data display.
- Mentored junior developers on best practices.

Frontend Developer | WebCrafters | 2016-2018
- Worked on various client websites using React and JavaScript.
- Improved application performance by optimizing component rendering.
- Used Git for version control in a team environment.

Skills:
- Programming Languages: JavaScript, TypeScript, HTML, CSS
- Frameworks/Libraries: React, Redux, Tailwind CSS
- Tools: Git, Webpack, Jest";
